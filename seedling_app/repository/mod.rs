mod league_repository;
mod post_repository;

pub use league_repository::LeagueRepository;
pub use post_repository::PostRepository;
