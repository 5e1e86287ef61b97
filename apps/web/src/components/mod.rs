pub mod footer;
pub mod header;
pub mod leadership_card;
pub mod project_card;
pub mod section;
pub mod skill_category_card;

pub use footer::*;
pub use header::*;
pub use leadership_card::*;
pub use project_card::*;
pub use section::*;
pub use skill_category_card::*;
