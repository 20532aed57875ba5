mod garden_handler;
mod league_handler;
mod points_handler;
mod posts_handler;
mod profile_handler;

pub use garden_handler::get_my_garden;
pub use league_handler::get_my_league;
pub use points_handler::add_points;
pub use posts_handler::delete_all_posts;
pub use profile_handler::get_my_profile;
