mod add_points;
mod delete_all_posts;

pub use add_points::AddPointsCommandHandler;
pub use delete_all_posts::DeleteAllPostsCommandHandler;
