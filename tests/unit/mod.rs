mod helpers;


mod publish_flow;

mod refresh_flow;

mod session_flow;
