pub mod add;
pub mod day;
pub mod delete;
pub mod edit;
pub mod on_this_day;
pub mod search;
pub mod show;

pub use add::handle_add;
pub use day::handle_day;
pub use delete::handle_delete;
pub use edit::handle_edit;
pub use on_this_day::handle_on_this_day;
pub use search::handle_search;
pub use show::handle_show;
