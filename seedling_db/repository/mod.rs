mod league_repository;
mod post_repository;

pub use league_repository::PostgresLeagueRepository;
pub use post_repository::PostgresPostRepository;
