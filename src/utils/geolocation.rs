use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use js_sys::Reflect;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::models::Location;
use crate::services::ApiError;

type Reply = Rc<RefCell<Option<oneshot::Sender<Result<Location, ApiError>>>>>;

fn read_number(target: &JsValue, key: &str) -> Option<f64> {
    Reflect::get(target, &JsValue::from_str(key)).ok()?.as_f64()
}

fn position_to_location(position: &JsValue) -> Result<Location, ApiError> {
    let coords = Reflect::get(position, &JsValue::from_str("coords"))
        .map_err(|_| ApiError::Parse("position without coords".into()))?;
    match (read_number(&coords, "latitude"), read_number(&coords, "longitude")) {
        (Some(latitude), Some(longitude)) => Ok(Location::new(latitude, longitude)),
        _ => Err(ApiError::Parse("coords without latitude/longitude".into())),
    }
}

/// One-shot browser geolocation lookup
pub async fn current_location() -> Result<Location, ApiError> {
    let geolocation = web_sys::window()
        .ok_or(ApiError::Unavailable("window"))?
        .navigator()
        .geolocation()
        .map_err(|_| ApiError::Unavailable("geolocation"))?;

    let (tx, rx) = oneshot::channel();
    let reply: Reply = Rc::new(RefCell::new(Some(tx)));

    let on_success = Closure::wrap(Box::new({
        let reply = reply.clone();
        move |position: JsValue| {
            if let Some(tx) = reply.borrow_mut().take() {
                let _ = tx.send(position_to_location(&position));
            }
        }
    }) as Box<dyn FnMut(JsValue)>);

    let on_error = Closure::wrap(Box::new({
        let reply = reply.clone();
        move |error: JsValue| {
            let message = Reflect::get(&error, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
                .unwrap_or_else(|| "unknown geolocation error".to_string());
            if let Some(tx) = reply.borrow_mut().take() {
                let _ = tx.send(Err(ApiError::Rejected(Some(message))));
            }
        }
    }) as Box<dyn FnMut(JsValue)>);

    geolocation
        .get_current_position_with_error_callback(
            on_success.as_ref().unchecked_ref(),
            Some(on_error.as_ref().unchecked_ref()),
        )
        .map_err(|_| ApiError::Unavailable("geolocation"))?;

    // Closures stay alive until one of them has answered
    let result = rx.await.map_err(|_| ApiError::Unavailable("geolocation"))?;
    drop(on_success);
    drop(on_error);
    result
}
