use std::error::Error;

use yew::prelude::*;
use web_sys::HtmlCanvasElement;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;

use crate::content::BREACH_COSTS;

const WIDTH: u32 = 640;
const HEIGHT: u32 = 320;

fn draw(canvas: HtmlCanvasElement) -> Result<(), Box<dyn Error>> {
    canvas.set_width(WIDTH);
    canvas.set_height(HEIGHT);

    let backend = CanvasBackend::with_canvas_object(canvas).ok_or("canvas has no 2d context")?;
    let root = backend.into_drawing_area();
    root.fill(&WHITE)?;

    let max_share = BREACH_COSTS.iter().map(|(_, pct, _)| *pct).max().unwrap_or(0);
    let rows = BREACH_COSTS.len();

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(170)
        .build_cartesian_2d(0u32..max_share + 4, 0usize..rows)?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .x_labels(5)
        .x_label_formatter(&|x| format!("{}%", x))
        .y_labels(rows)
        .y_label_formatter(&|y| {
            // rows are drawn top down
            rows.checked_sub(y + 1)
                .and_then(|i| BREACH_COSTS.get(i))
                .map(|(label, _, _)| label.to_string())
                .unwrap_or_default()
        })
        .label_style(("sans-serif", 14))
        .draw()?;

    chart.draw_series(BREACH_COSTS.iter().enumerate().map(|(i, (_, pct, (r, g, b)))| {
        let row = rows - 1 - i;
        let mut bar = Rectangle::new([(0, row), (*pct, row + 1)], RGBColor(*r, *g, *b).filled());
        bar.set_margin(6, 6, 0, 0);
        bar
    }))?;

    root.present()?;
    Ok(())
}

/// Horizontal bar chart of what a data breach costs, by share.
#[function_component(BreachChart)]
pub fn breach_chart() -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    if let Err(e) = draw(canvas) {
                        log::error!("Failed to draw breach chart: {}", e);
                    }
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="breach-chart">
            <canvas
                ref={canvas_ref}
                width={WIDTH.to_string()}
                height={HEIGHT.to_string()}
                style="max-width: 100%;"
            />
            <p class="chart-source">{"Quelle: IBM Cost of a Data Breach Report, Anteil an den Gesamtkosten."}</p>
        </div>
    }
}
