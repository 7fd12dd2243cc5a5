use leptos::prelude::*;

use crate::components::node_map::NodeMap;
use crate::components::theme::ThemeSwitcher;
use crate::config::AppConfig;

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let config = use_context::<AppConfig>().unwrap_or_default();

	view! {
		<header class="toolbar">
			<h1>"Odin"</h1>
			<ThemeSwitcher scheme=config.theme_scheme />
		</header>
		<main>
			<h2>"Known nodes"</h2>
			<NodeMap endpoint=config.nodes_endpoint placement=config.placement />
		</main>
	}
}
