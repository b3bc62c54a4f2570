use std::f64::consts::PI;

use shared::constants::{SECTOR_COUNT, SECTOR_WIDTH_DEGREES};
use shared::reward_wheel::PrizeCatalog;
use yew::prelude::*;

const LABEL_RADIUS: f64 = 80.0;
const PEG_RADIUS: f64 = 121.0;
const PEG_SIZE: f64 = 6.0;
const POINTER_BASE_TILT: f64 = -15.0;
pub const POINTER_COLOR: &str = "#FF6B00";
pub const POINTER_PULSE_COLOR: &str = "#FF0000";

/// Offset from the wheel centre for a point `radius` px out at `angle`
/// degrees clockwise from the top.
pub fn polar_offset(angle: f64, radius: f64) -> (f64, f64) {
    let radians = (angle - 90.0) * (PI / 180.0);
    (radius * radians.cos(), radius * radians.sin())
}

pub fn conic_gradient(catalog: &PrizeCatalog) -> String {
    let stops: Vec<String> = catalog
        .iter()
        .map(|prize| {
            format!(
                "{} {}deg {}deg",
                prize.color_token,
                prize.sector_start_angle,
                prize.sector_end_angle()
            )
        })
        .collect();
    format!("conic-gradient(from 0deg, {})", stops.join(", "))
}

#[derive(Properties, PartialEq)]
pub struct WheelViewProps {
    pub rotation: f64,
    pub catalog: PrizeCatalog,
    pub active_peg: Option<usize>,
    pub pointer_tilt: f64,
    pub pointer_blinking: bool,
}

#[function_component(WheelView)]
pub fn wheel_view(props: &WheelViewProps) -> Html {
    let dividers = (0..SECTOR_COUNT).map(|index| {
        let angle = index as f64 * SECTOR_WIDTH_DEGREES;
        html! {
            <div
                key={format!("divider-{}", index)}
                class="absolute w-0.5 h-32 bg-white/50"
                style={format!(
                    "transform: rotate({}deg); transform-origin: 50% 100%; bottom: 50%; left: 50%; margin-left: -1px;",
                    angle
                )}
            ></div>
        }
    });

    let labels = props.catalog.iter().enumerate().map(|(index, prize)| {
        let (x, y) = polar_offset(prize.sector_start_angle + SECTOR_WIDTH_DEGREES / 2.0, LABEL_RADIUS);
        html! {
            <div
                key={format!("prize-{}", index)}
                class="absolute text-white font-bold text-center flex flex-col items-center"
                style={format!(
                    "left: 50%; top: 50%; transform: translate({:.1}px, {:.1}px); z-index: 15; width: 50px; \
                     text-shadow: 1px 1px 2px rgba(0,0,0,0.8); font-size: 10px; line-height: 1.2;",
                    x - 25.0,
                    y - 15.0
                )}
            >
                <div class="mb-1 text-base">{prize.kind().icon()}</div>
                { for prize.name.split_whitespace().map(|word| html! { <div>{word}</div> }) }
            </div>
        }
    });

    let pegs = (0..SECTOR_COUNT).map(|index| {
        let (x, y) = polar_offset(index as f64 * SECTOR_WIDTH_DEGREES, PEG_RADIUS);
        let active = props.active_peg == Some(index);
        html! {
            <div
                key={format!("peg-{}", index)}
                class={classes!(
                    "absolute", "w-3", "h-3", "rounded-full", "shadow-lg", "transition-all", "duration-150",
                    if active { "bg-red-400" } else { "bg-white" }
                )}
                style={format!(
                    "left: 50%; top: 50%; transform: translate({:.1}px, {:.1}px) scale({}); z-index: 10; border: 2px solid {};{}",
                    x - PEG_SIZE,
                    y - PEG_SIZE,
                    if active { 1.25 } else { 1.0 },
                    if active { "#FF0000" } else { "#FFA500" },
                    if active { " box-shadow: 0 0 15px rgba(255, 0, 0, 0.6);" } else { "" }
                )}
            />
        }
    });

    let pointer_color = if props.pointer_blinking { POINTER_PULSE_COLOR } else { POINTER_COLOR };

    html! {
        <div class="relative w-64 h-64">
            <div
                class="w-full h-full rounded-full border-4 border-orange-300 relative overflow-hidden shadow-xl"
                style={format!("transform: rotate({:.2}deg); transform-origin: center;", props.rotation)}
            >
                <div class="absolute inset-0 rounded-full" style={format!("background: {};", conic_gradient(&props.catalog))}>
                    <div class="absolute inset-0 flex items-center justify-center">{ for dividers }</div>
                    <div class="absolute inset-0 flex items-center justify-center">{ for labels }</div>
                    <div class="absolute inset-0 flex items-center justify-center">{ for pegs }</div>
                </div>
            </div>

            <div class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 w-16 h-16 bg-white rounded-full border-4 border-orange-400 flex items-center justify-center shadow-lg z-10 text-2xl">
                {"🎁"}
            </div>

            // pointer at 3 o'clock, shaped like a pencil
            <div
                class={classes!("absolute", "z-20", "transition-all", "duration-150",
                    props.pointer_blinking.then_some("scale-110 brightness-150"))}
                style={format!(
                    "right: -24px; top: 50%; transform: translateY(-50%) rotate({}deg); transform-origin: center bottom;",
                    POINTER_BASE_TILT + props.pointer_tilt
                )}
            >
                <div class="relative flex items-center">
                    <div
                        class="absolute left-0 z-30"
                        style="width: 0; height: 0; border-top: 6px solid transparent; border-bottom: 6px solid transparent; border-right: 12px solid #333333;"
                    ></div>
                    <div
                        class="relative ml-3 transition-all duration-150"
                        style={format!(
                            "width: 32px; height: 16px; border-radius: 0 8px 8px 0; background: linear-gradient(135deg, {0} 0%, #FF8F40 50%, {0} 100%);",
                            pointer_color
                        )}
                    ></div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::reward_wheel::catalog_group;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_polar_offset_starts_at_top() {
        let (x, y) = polar_offset(0.0, 100.0);
        assert!(close(x, 0.0) && close(y, -100.0));
        let (x, y) = polar_offset(90.0, 100.0);
        assert!(close(x, 100.0) && close(y, 0.0));
    }

    #[test]
    fn test_conic_gradient_has_one_stop_per_sector() {
        let gradient = conic_gradient(catalog_group(0));
        assert!(gradient.starts_with("conic-gradient(from 0deg, #FF6B00 0deg 60deg"));
        assert!(gradient.ends_with("#FF7A1A 300deg 360deg)"));
        assert_eq!(gradient.matches("deg,").count(), 6);
    }
}
