#![allow(non_snake_case)]

use dioxus::prelude::*;
use stopwatch_core::StopwatchConfig;

use crate::components::Stopwatch;

#[component]
pub fn App() -> Element {
    let config = use_hook(StopwatchConfig::default);

    rsx! {
        main { class: "stopwatch-app",
            Stopwatch { config }
        }
    }
}
