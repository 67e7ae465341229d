use super::models::{Catalog, Product};

pub struct Repository<'a> {
    catalog: &'a Catalog
}

impl <'a> Repository <'a> {

    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn products(&self) -> &'static [Product] {
        self.catalog.products
    }

}

#[cfg(test)]
mod tests {
    use super::Repository;
    use crate::constants;

    #[test]
    fn products_returns_every_catalog_entry() {
        let repository = Repository::new(&constants::APP_CATALOG);

        assert_eq!(repository.products().len(), 13);
    }

    #[test]
    fn products_preserves_declaration_order() {
        let repository = Repository::new(&constants::APP_CATALOG);
        let names: Vec<&str> = repository.products().iter().map(|product| product.name).collect();

        assert_eq!(names, [
            "Thermometer",
            "Pedialite",
            "Fidget Spinner",
            "Maple Chess Set",
            "Scrabble",
            "Cards Against Humanity",
            "Hazelenut Coffee",
            "Notebook",
            "Playstation 5",
            "Oculus Quest 2 - 256 GB",
            "The Office:  The Complete Series",
            "MEBERRY Android 10.0 Tablet",
            "Yamaha P71 88-Key Piano",
        ]);
    }

    #[test]
    fn ninth_product_is_the_playstation() {
        let repository = Repository::new(&constants::APP_CATALOG);
        let product = &repository.products()[8];

        assert_eq!(product.name, "Playstation 5");
        assert_eq!(product.description, "None of us can afford this.");
        assert_eq!(product.price, 969.99);
    }

    #[test]
    fn every_product_has_a_name() {
        let repository = Repository::new(&constants::APP_CATALOG);

        assert!(repository.products().iter().all(|product| !product.name.is_empty()));
    }

    #[test]
    fn products_is_stable_across_calls() {
        let repository = Repository::new(&constants::APP_CATALOG);

        assert!(std::ptr::eq(repository.products(), repository.products()));
    }
}
