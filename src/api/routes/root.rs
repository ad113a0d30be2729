//! Root Route
//!
//! - GET / - Plain-text listing of the available routes

/// GET /
pub async fn welcome() -> &'static str {
    "Welcome to the Hilo climate API.\n\
     \n\
     Available routes:\n\
       /api/v1.0/precipitation\n\
       /api/v1.0/stations\n\
       /api/v1.0/tobs\n\
       /api/v1.0/{start}\n\
       /api/v1.0/{start}/{end}\n\
     \n\
     Dates accept yyyy-m-d through yyyy-mm-dd.\n"
}
