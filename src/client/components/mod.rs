pub mod eve_login;
pub mod form;
pub mod member_list;
pub mod navbar;
pub mod page;
pub mod pay_in;
pub mod setup_fleet;
pub mod share_editor;

pub use eve_login::EveLogin;
pub use member_list::MemberList;
pub use navbar::Navbar;
pub use page::Page;
pub use pay_in::PayIn;
pub use setup_fleet::SetupFleet;
pub use share_editor::ShareEditor;
