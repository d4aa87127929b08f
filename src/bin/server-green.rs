//! Green slot: release v2.0, staged for validation
//!
//! Serves everything the blue slot does plus `GET /api/features`.

fn main() -> Result<(), bluegreen_server::ServerError> {
    bluegreen_server::launch(&bluegreen_server::GREEN)
}
