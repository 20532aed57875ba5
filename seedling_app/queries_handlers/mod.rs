mod get_my_garden;
mod get_my_league;
mod get_my_profile;

pub use get_my_garden::GetMyGardenHandler;
pub use get_my_league::GetMyLeagueHandler;
pub use get_my_profile::GetMyProfileHandler;
