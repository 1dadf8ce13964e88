//! Standalone demo: a font size selector driving a text preview.

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_font_size::font_size_selector;

const SIZES: [f32; 5] = [12.0, 14.0, 16.0, 18.0, 24.0];

fn main() {
    env_logger::init();

    let selected = RwSignal::new(1usize);

    floem::Application::new()
        .window(
            move |_| {
                let selector = match font_size_selector(SIZES, selected) {
                    Ok(selector) => selector.style(|s| s.width_full()).into_any(),
                    Err(err) => label(move || err.to_string()).into_any(),
                };
                v_stack((
                    label(|| "The quick brown fox").style(move |s| {
                        s.font_size(SIZES[selected.get()]).height(40.0)
                    }),
                    selector,
                    text("Reset")
                        .style(|s| s.cursor(floem::style::CursorStyle::Pointer))
                        .on_click_stop(move |_| selected.set(1)),
                ))
                .style(|s| s.gap(12.0).padding(16.0).size_full())
                .on_event_stop(floem::event::EventListener::WindowClosed, |_| {
                    floem::quit_app()
                })
            },
            Some(
                WindowConfig::default()
                    .size((320.0, 160.0))
                    .title("floem-font-size"),
            ),
        )
        .run();
}
