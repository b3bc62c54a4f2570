use shared::constants::{MAX_REGENERATIONS, SPIN_BLOCKED_ERROR};
use shared::reward_wheel::{Prize, PrizeCatalog, RewardKind};
use yew::prelude::*;

use crate::config::FeedbackSettings;

pub fn spin_button_text(is_spinning: bool, can_spin: bool) -> &'static str {
    if is_spinning {
        "Girando..."
    } else if can_spin {
        "Girar Roleta"
    } else {
        SPIN_BLOCKED_ERROR
    }
}

pub fn result_message(prize: &Prize) -> String {
    format!("Parabéns! Você ganhou: {}", prize.name)
}

// Result display component
#[derive(Properties, PartialEq)]
pub struct ResultDisplayProps {
    pub prize: Option<Prize>,
    pub show_result: bool,
}

#[function_component(ResultDisplay)]
pub fn result_display(props: &ResultDisplayProps) -> Html {
    let Some(prize) = props.prize.as_ref().filter(|_| props.show_result) else {
        return html! {};
    };

    let kind = prize.kind();
    let animation_class = if kind.has_effect() { "animate-bounce" } else { "animate-pulse" };

    html! {
        <div class="mt-4 flex flex-col items-center justify-center">
            <div
                class={classes!(
                    "flex", "items-center", "justify-center", "gap-2", "px-6", "py-3",
                    "rounded-xl", "text-white", "font-bold", "text-lg", "shadow-lg",
                    "border-2", "border-white/60", "transition-all", "duration-500",
                    animation_class
                )}
                style={format!("background: {};", prize.color_token)}
            >
                <span>{kind.icon()}</span>
                <span>{result_message(prize)}</span>
            </div>
            {
                match kind {
                    RewardKind::FreeSpins | RewardKind::SpecialSpin => html! {
                        <div class="text-sm text-gray-600 dark:text-gray-400 mt-2 bg-gray-100 dark:bg-gray-800 px-4 py-1 rounded-full">
                            {"Giros adicionados ao seu saldo"}
                        </div>
                    },
                    _ => html! {},
                }
            }
        </div>
    }
}

// Spin button component
#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub is_spinning: bool,
    pub can_spin: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let is_disabled = props.is_spinning || !props.can_spin;

    let button_class = if props.is_spinning {
        "bg-gradient-to-r from-orange-300 to-orange-400 opacity-90 cursor-wait text-white"
    } else if is_disabled {
        "bg-gradient-to-r from-gray-400 to-gray-500 opacity-75 cursor-not-allowed text-white"
    } else {
        "bg-gradient-to-r from-yellow-400 to-orange-500 hover:from-yellow-500 hover:to-orange-600 text-white shadow-lg hover:shadow-xl transform hover:-translate-y-0.5 active:translate-y-0"
    };

    let spin_icon_class = if props.is_spinning { "inline-block mr-2 animate-spin" } else { "hidden" };

    html! {
        <div class="relative w-full">
            <div class={classes!(
                "relative", "overflow-hidden", "rounded-full", "w-full",
                button_class,
                (!is_disabled).then_some("animate-pulse-subtle")
            )}>
                <button
                    onclick={props.onclick.clone()}
                    disabled={is_disabled}
                    class="relative w-full px-8 py-3 font-bold text-lg transition-all duration-300 border-2 border-transparent hover:border-white focus:outline-none focus:ring-4 focus:ring-yellow-300 focus:ring-opacity-50 bg-transparent"
                >
                    <div class="flex items-center justify-center relative z-10">
                        <svg class={spin_icon_class} xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                            <circle cx="12" cy="12" r="10" />
                            <path d="M12 6v6l4 2" />
                        </svg>
                        <span>{spin_button_text(props.is_spinning, props.can_spin)}</span>
                    </div>
                </button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct RegenerateButtonProps {
    pub cost: Option<u32>,
    pub regeneration_count: u32,
    pub can_regenerate: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(RegenerateButton)]
pub fn regenerate_button(props: &RegenerateButtonProps) -> Html {
    let label = match props.cost {
        Some(cost) => format!("🔄 Novos prêmios ({} moedas)", cost),
        None => "Limite de trocas atingido".to_string(),
    };

    html! {
        <button
            onclick={props.onclick.clone()}
            disabled={!props.can_regenerate}
            class={classes!(
                "w-full", "px-4", "py-2", "rounded-full", "text-sm", "font-semibold",
                "border-2", "transition-all", "duration-300",
                if props.can_regenerate {
                    "border-orange-400 text-orange-600 hover:bg-orange-50 dark:hover:bg-gray-700"
                } else {
                    "border-gray-300 text-gray-400 cursor-not-allowed"
                }
            )}
        >
            <span>{label}</span>
            <span class="ml-2 text-xs opacity-75">
                {format!("{}/{}", props.regeneration_count, MAX_REGENERATIONS)}
            </span>
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct SpinCountersProps {
    pub regular_spins: u32,
    pub special_spins: u32,
    pub currency_balance: u32,
}

#[function_component(SpinCounters)]
pub fn spin_counters(props: &SpinCountersProps) -> Html {
    let counter = |icon: &str, label: &str, value: u32| {
        html! {
            <div class="flex flex-col items-center bg-gray-50 dark:bg-gray-700/40 rounded-lg px-3 py-2 shadow-sm">
                <span class="text-lg">{icon}</span>
                <span class="font-bold text-gray-900 dark:text-white">{value}</span>
                <span class="text-xs text-gray-500 dark:text-gray-400">{label}</span>
            </div>
        }
    };

    html! {
        <div class="grid grid-cols-3 gap-2 w-full">
            {counter("🎡", "Giros", props.regular_spins)}
            {counter("⭐", "Especiais", props.special_spins)}
            {counter("🪙", "Moedas", props.currency_balance)}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PrizeLegendProps {
    pub catalog: PrizeCatalog,
}

/// Advertised chances. The landing sector is decided by geometry alone.
#[function_component(PrizeLegend)]
pub fn prize_legend(props: &PrizeLegendProps) -> Html {
    html! {
        <div class="grid grid-cols-2 gap-2 w-full">
            { for props.catalog.iter().map(|prize| html! {
                <div
                    class="bg-white dark:bg-gray-800 p-2 rounded-lg shadow-sm flex items-center border-l-4"
                    style={format!("border-color: {};", prize.color_token)}
                >
                    <div class="w-3 h-3 rounded-full mr-2 flex-shrink-0" style={format!("background: {};", prize.color_token)}></div>
                    <div class="text-left">
                        <div class="text-sm font-medium text-gray-900 dark:text-white">{&prize.name}</div>
                        <div class="text-xs text-gray-500 dark:text-gray-400">{format!("{}% de chance", prize.display_chance)}</div>
                    </div>
                </div>
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FeedbackTogglesProps {
    pub settings: FeedbackSettings,
    pub on_change: Callback<FeedbackSettings>,
}

#[function_component(FeedbackToggles)]
pub fn feedback_toggles(props: &FeedbackTogglesProps) -> Html {
    let toggle = |label: &'static str, enabled: bool, update: fn(&mut FeedbackSettings)| {
        let settings = props.settings;
        let on_change = props.on_change.clone();
        let onclick = Callback::from(move |_: MouseEvent| {
            let mut next = settings;
            update(&mut next);
            on_change.emit(next);
        });
        html! {
            <button
                {onclick}
                aria-pressed={enabled.to_string()}
                class={classes!(
                    "px-3", "py-1", "rounded-full", "text-xs", "font-medium", "transition-colors",
                    if enabled {
                        "bg-orange-100 text-orange-700 dark:bg-orange-900/40 dark:text-orange-300"
                    } else {
                        "bg-gray-100 text-gray-400 line-through dark:bg-gray-800"
                    }
                )}
            >
                {label}
            </button>
        }
    };

    let s = props.settings;
    html! {
        <div class="flex justify-center gap-2">
            {toggle("🔊 Som", s.sound, |s| s.sound = !s.sound)}
            {toggle("📳 Vibração", s.haptics, |s| s.haptics = !s.haptics)}
            {toggle("🎉 Confete", s.confetti, |s| s.confetti = !s.confetti)}
        </div>
    }
}
