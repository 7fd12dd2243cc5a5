use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::error;
use web_sys::{Event, MouseEvent};

use super::scheme::{SchemeKind, ThemeController};
use super::store::{BrowserStore, ElementClasses, ThemeError};

type BrowserThemeController = ThemeController<BrowserStore, ElementClasses>;

fn browser_controller(kind: SchemeKind) -> Result<BrowserThemeController, ThemeError> {
	Ok(ThemeController::new(kind, BrowserStore::local()?, ElementClasses::body()?))
}

/// Palette selector and dark-mode toggle bound to `localStorage`.
///
/// With [`SchemeKind::Legacy`] only a single "Switch Theme" control is shown.
#[component]
pub fn ThemeSwitcher(#[prop(default = SchemeKind::Palette)] scheme: SchemeKind) -> impl IntoView {
	let controller = match browser_controller(scheme) {
		Ok(c) => Rc::new(RefCell::new(c)),
		Err(err) => {
			error!("Theme switcher disabled: {err}");
			return ().into_any();
		}
	};

	let (appearance, set_appearance) = signal(controller.borrow_mut().restore());
	let offers_palettes = controller.borrow().offers_palettes();

	let ctl_toggle = controller.clone();
	let on_toggle = move |_: MouseEvent| {
		let next = ctl_toggle.borrow_mut().toggle_dark_mode();
		set_appearance.set(next);
	};

	if !offers_palettes {
		return view! {
			<div class="theme-switcher" on:click=on_toggle>
				"Switch Theme"
			</div>
		}
		.into_any();
	}

	let ctl_select = controller.clone();
	let on_change = move |ev: Event| {
		let next = ctl_select.borrow_mut().select_color_theme(&event_target_value(&ev));
		set_appearance.set(next);
	};

	let toggle_label = move || {
		if appearance.get().dark { "Light mode" } else { "Dark mode" }
	};

	view! {
		<div class="theme-controls">
			// options carry the selection; a select-level value is applied before they mount
			<select id="color-theme" on:change=on_change>
				{appearance
					.get_untracked()
					.palette_options()
					.map(|(t, selected)| {
						view! {
							<option
								value=t.as_str()
								selected=selected
								prop:selected=move || appearance.get().color_theme == t
							>
								{t.label()}
							</option>
						}
					})
					.collect_view()}
			</select>
			<button
				id="dark-mode-toggle"
				aria-pressed=move || if appearance.get().dark { "true" } else { "false" }
				on:click=on_toggle
			>
				{toggle_label}
			</button>
		</div>
	}
	.into_any()
}
