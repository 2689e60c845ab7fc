pub mod add_to_cart_button;
pub mod cart_item_row;
pub mod dashboard_panels;
pub mod favorite_button;
pub mod header;
pub mod masked_input;
pub mod notification_stack;
pub mod product_card;
pub mod product_carousel;
pub mod step_indicator;
