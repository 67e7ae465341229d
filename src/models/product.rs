#[derive(Debug, Clone)]
pub struct Product {
    pub name: &'static str,
    pub description: &'static str,
    pub price: f64,
}
