// Operator actions reachable from the main menu
pub mod add_category;
pub mod add_tool;

pub use add_category::handle_add_category;
pub use add_tool::handle_add_tool;
