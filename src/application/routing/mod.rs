/// Routing - static route table and view-initiated navigation
mod navigation_queue;
mod route_table;

pub use navigation_queue::ChannelNavigator;
pub use route_table::{Route, RouteMatch, RouteTable};
