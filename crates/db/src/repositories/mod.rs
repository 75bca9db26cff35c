//! One repository per table. Each is a unit struct with associated async
//! functions taking `&PgPool`, so call sites read `UserRepo::find_by_id(...)`.

pub mod episode_repo;
pub mod favorite_repo;
pub mod media_repo;
pub mod session_repo;
pub mod user_repo;

pub use episode_repo::EpisodeRepo;
pub use favorite_repo::FavoriteRepo;
pub use media_repo::MediaRepo;
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;
