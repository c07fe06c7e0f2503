//! Runs one text request and one image request against `./output` and
//! prints the responses as JSON.

use shape_service::{logging, Dispatcher, RequestRecord};

fn main() -> Result<(), serde_json::Error> {
    logging::init();

    let dispatcher = Dispatcher::default();

    let text_response = dispatcher.handle(&RequestRecord::text("a small toy car"));
    println!("Text response: {}", serde_json::to_string_pretty(&text_response)?);

    let image_response = dispatcher.handle(&RequestRecord::image("examples/chair.jpg"));
    println!("Image response: {}", serde_json::to_string_pretty(&image_response)?);

    Ok(())
}
