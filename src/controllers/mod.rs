mod actions;
mod add_to_cart;

pub use self::actions::Actions as ActionsController;
pub use self::add_to_cart::AddToCart as AddToCartController;
