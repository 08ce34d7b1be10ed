//! Pieces of the home page.

mod expense_list;
mod gauge;
mod profile_menu;

pub use expense_list::ExpenseList;
pub use gauge::Gauge;
pub use profile_menu::ProfileMenu;
