use super::product::Product;

#[derive(Debug)]
pub struct Catalog {
    pub products: &'static [Product],
}
