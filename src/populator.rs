use super::constants;
use super::repository::Repository;
use super::widgets::{CatalogPage, CatalogRow, Window};

pub struct Populator {}

impl Populator {

    pub fn populate(window: &Window, repository: &Repository) {
        let page = window.catalog_page();
        page.set_header(constants::APP_HEADER);
        Self::populate_catalog(page, repository);
    }

    fn populate_catalog(page: &CatalogPage, repository: &Repository) {
        for product in repository.products() {
            let row = CatalogRow::from_product(product);
            page.append_row(row);
        }
    }

}
