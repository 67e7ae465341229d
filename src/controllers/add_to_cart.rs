use super::super::widgets::CatalogPage;

pub struct AddToCart {
    page: CatalogPage,
}

impl AddToCart {

    pub fn new(page: &CatalogPage) -> Self {
        let this = Self { page: page.clone() };
        this.setup_add_requests();
        this
    }

    fn setup_add_requests(&self) {
        self.page.connect_add_requested(|_page, row| {
            Self::handle_add_request(&row.product_name());
        });
    }

    fn handle_add_request(product_name: &str) {
        eprintln!("{notice}", notice = add_notice(product_name));
    }

}

fn add_notice(product_name: &str) -> String {
    format!("Adding {product_name}")
}

#[cfg(test)]
mod tests {
    use super::add_notice;

    #[test]
    fn add_notice_names_the_product() {
        assert_eq!(add_notice("Notebook"), "Adding Notebook");
    }

    #[test]
    fn add_notice_keeps_the_name_verbatim() {
        let notice = add_notice("The Office:  The Complete Series");

        assert!(notice.contains("The Office:  The Complete Series"));
        assert_eq!(notice, "Adding The Office:  The Complete Series");
    }
}
