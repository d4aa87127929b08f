//! Blue slot: release v1.0, serving production traffic

fn main() -> Result<(), bluegreen_server::ServerError> {
    bluegreen_server::launch(&bluegreen_server::BLUE)
}
