//! Browser bindings.
//!
//! Exposes the solvers to JavaScript through `wasm-bindgen`. Inputs and
//! outputs cross the boundary as plain objects via `serde-wasm-bindgen`,
//! using the camelCase field names of the Rust types.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::knapsack::{BnbConfig, BnbRunner, KnapsackProblem};
use crate::queens::{QueensConfig, QueensRunner};

#[derive(Deserialize)]
struct KnapsackInput {
    items: Vec<InputItem>,
    capacity: f64,
}

#[derive(Deserialize)]
struct InputItem {
    weight: f64,
    value: f64,
}

fn to_js_error(err: serde_wasm_bindgen::Error) -> JsError {
    JsError::new(&err.to_string())
}

/// Serializes `value` with maps emitted as plain objects.
///
/// Trace entries flatten their event into the entry, which serde encodes
/// as a map; the default serializer would hand those to JavaScript as
/// `Map` instances.
fn to_plain_object<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_maps_as_objects(true);
    value.serialize(&serializer).map_err(to_js_error)
}

/// Solves `{ items: [{ weight, value }], capacity }`.
///
/// Item ids are their positions in `items`. `config` may be `undefined`
/// or a partial `BnbConfig` object. Invalid input rejects with the
/// validation message.
#[wasm_bindgen(js_name = solveKnapsack)]
pub fn solve_knapsack(input: JsValue, config: JsValue) -> Result<JsValue, JsError> {
    let input: KnapsackInput = serde_wasm_bindgen::from_value(input).map_err(to_js_error)?;
    let config: BnbConfig = if config.is_undefined() || config.is_null() {
        BnbConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config).map_err(to_js_error)?
    };

    let pairs: Vec<(f64, f64)> = input.items.iter().map(|i| (i.weight, i.value)).collect();
    let problem = KnapsackProblem::from_pairs(input.capacity, &pairs);
    let solution = BnbRunner::run(&problem, &config)?;

    to_plain_object(&solution)
}

/// Enumerates N-Queens solutions with their backtracking trace.
///
/// `max_solutions = 0` enumerates all of them.
#[wasm_bindgen(js_name = solveQueens)]
pub fn solve_queens(n: usize, max_solutions: usize) -> Result<JsValue, JsError> {
    let config = QueensConfig::new(n).with_max_solutions(max_solutions);
    let result = QueensRunner::run(&config)?;

    to_plain_object(&result)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use js_sys::Reflect;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    fn get(target: &JsValue, key: &str) -> JsValue {
        Reflect::get(target, &JsValue::from_str(key)).unwrap()
    }

    #[wasm_bindgen_test]
    fn test_trace_entries_are_plain_objects() {
        let input = serde_json::json!({
            "items": [
                { "weight": 10.0, "value": 60.0 },
                { "weight": 20.0, "value": 100.0 },
                { "weight": 30.0, "value": 120.0 }
            ],
            "capacity": 50.0
        })
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap();
        let Ok(output) = solve_knapsack(input, JsValue::UNDEFINED) else {
            panic!("worked example rejected");
        };

        assert_eq!(get(&output, "bestValue").as_f64(), Some(220.0));
        let trace = js_sys::Array::from(&get(&output, "trace"));
        let root = trace.get(0);
        assert!(!root.is_instance_of::<js_sys::Map>());
        assert_eq!(get(&root, "kind").as_string().as_deref(), Some("root"));
        assert!(get(&root, "message").is_string());
    }

    #[wasm_bindgen_test]
    fn test_queens_events_are_plain_objects() {
        let Ok(output) = solve_queens(4, 1) else {
            panic!("4-queens rejected");
        };
        let events = js_sys::Array::from(&get(&get(&output, "trace"), "events"));
        let first = events.get(0);
        assert!(!first.is_instance_of::<js_sys::Map>());
        assert_eq!(get(&first, "kind").as_string().as_deref(), Some("place"));
    }
}
