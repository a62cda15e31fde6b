//! 추천 시스템을 위한 도메인 모델.

mod event;
mod indicators;
mod price;
mod recommendation;
mod user;

pub use event::*;
pub use indicators::*;
pub use price::*;
pub use recommendation::*;
pub use user::*;
