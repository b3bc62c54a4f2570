mod confetti;
mod feedback;
mod frame_loop;
mod wheel_utils;
mod wheel_view;

use std::cell::RefCell;
use std::ops::ControlFlow;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use shared::constants::{SETTLE_DELAY_MS, TICK_PULSE_MS};
use shared::reward_wheel::{catalog_group, peg_under_pointer, SessionConfig, SessionSnapshot, SpinMotion, SpinSession};
use web_sys::Element;
use yew::prelude::*;

use crate::config::{get_feedback_settings, get_session_config, save_feedback_settings, FeedbackSettings};
use crate::hooks::{use_injected_style, use_key_listener};
use crate::styles;

pub use frame_loop::{CancelToken, FrameLoop};

use confetti::{spawn_confetti, Viewport};
use feedback::FeedbackPlayer;
use wheel_utils::{FeedbackToggles, PrizeLegend, RegenerateButton, ResultDisplay, SpinButton, SpinCounters};
use wheel_view::WheelView;

const TICK_TILT_DEGREES: f64 = -25.0;

const CUSTOM_CSS: &str = r#"
@keyframes pulse-subtle {
    0% {
        transform: scale(1);
        box-shadow: 0 0 0 0 rgba(255, 165, 0, 0.4);
    }
    70% {
        transform: scale(1.02);
        box-shadow: 0 0 0 10px rgba(255, 165, 0, 0);
    }
    100% {
        transform: scale(1);
        box-shadow: 0 0 0 0 rgba(255, 165, 0, 0);
    }
}

.animate-pulse-subtle {
    animation: pulse-subtle 2s infinite;
}

@keyframes confetti-fall {
    0% {
        transform: translate(0, 0) rotate(0deg);
        opacity: 1;
    }
    100% {
        transform: translate(var(--confetti-drift), var(--confetti-fall)) rotate(var(--confetti-spin));
        opacity: 0;
    }
}

.confetti-particle {
    position: absolute;
    border-radius: 2px;
    animation-name: confetti-fall;
    animation-timing-function: cubic-bezier(0.25, 0.46, 0.45, 0.94);
    animation-fill-mode: forwards;
}
"#;

#[derive(Properties, PartialEq)]
pub struct RewardWheelModalProps {
    pub open: bool,
    pub on_open_change: Callback<bool>,
    /// Overrides the starting counters, mainly for embedding hosts.
    #[prop_or_default]
    pub session_config: Option<SessionConfig>,
}

/// Daily reward wheel dialog. A fresh session is created every time it opens.
#[function_component(RewardWheelModal)]
pub fn reward_wheel_modal(props: &RewardWheelModalProps) -> Html {
    if !props.open {
        return html! {};
    }

    let config = props.session_config.unwrap_or_else(get_session_config);
    let on_close = props.on_open_change.reform(|_: ()| false);

    html! { <RewardWheelDialog {config} {on_close} /> }
}

/// In-flight timers of the current spin. Dropping a handle cancels it.
#[derive(Default)]
struct SpinHandles {
    frame_loop: Option<FrameLoop>,
    settle: Option<Timeout>,
    tick_revert: Option<Timeout>,
}

impl SpinHandles {
    fn cancel(&mut self) {
        if let Some(frame_loop) = self.frame_loop.take() {
            frame_loop.cancel();
        }
        self.settle.take();
        self.tick_revert.take();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct PointerState {
    active_peg: Option<usize>,
    tilt: f64,
    blinking: bool,
}

/// What asked the dialog to close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DismissTrigger {
    CloseButton,
    EscapeKey,
    OutsideClick,
}

impl DismissTrigger {
    /// Closing aborts any spin in flight, so clicks outside the panel are ignored.
    fn closes_dialog(self) -> bool {
        !matches!(self, Self::OutsideClick)
    }
}

#[derive(Properties, PartialEq)]
struct RewardWheelDialogProps {
    config: SessionConfig,
    on_close: Callback<()>,
}

#[function_component(RewardWheelDialog)]
fn reward_wheel_dialog(props: &RewardWheelDialogProps) -> Html {
    use_injected_style(CUSTOM_CSS);

    let config = props.config;
    let session = use_mut_ref(move || SpinSession::new(config));
    let snapshot = {
        let session = session.clone();
        use_state(move || session.borrow().snapshot())
    };
    let rng = use_mut_ref(SmallRng::from_entropy);
    let handles = use_mut_ref(SpinHandles::default);
    let pointer = use_state(PointerState::default);
    let settings = use_state(get_feedback_settings);
    let live_settings = use_mut_ref(|| *settings);
    let player = use_mut_ref(FeedbackPlayer::new);
    let confetti_ref = use_node_ref();
    let error_message = use_state(String::new);

    // Unmounting abandons any spin in flight without resolving it
    {
        let session = session.clone();
        let handles = handles.clone();
        use_effect_with((), move |_| {
            move || {
                handles.borrow_mut().cancel();
                session.borrow_mut().abort_spin();
            }
        });
    }

    let close = {
        let session = session.clone();
        let handles = handles.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |trigger: DismissTrigger| {
            if !trigger.closes_dialog() {
                return;
            }
            log::debug!("Reward wheel closed by {:?}", trigger);
            handles.borrow_mut().cancel();
            session.borrow_mut().abort_spin();
            on_close.emit(());
        })
    };

    use_key_listener("Escape", close.reform(|_: ()| DismissTrigger::EscapeKey));

    let on_spin = {
        let session = session.clone();
        let snapshot = snapshot.clone();
        let rng = rng.clone();
        let handles = handles.clone();
        let pointer = pointer.clone();
        let live_settings = live_settings.clone();
        let player = player.clone();
        let confetti_ref = confetti_ref.clone();
        let error_message = error_message.clone();

        Callback::from(move |_: MouseEvent| {
            let motion = match session.borrow_mut().start_spin(&mut *rng.borrow_mut()) {
                Ok(motion) => motion,
                Err(blocked) => {
                    error_message.set(blocked.to_string());
                    return;
                }
            };
            error_message.set(String::new());
            pointer.set(PointerState::default());
            snapshot.set(session.borrow().snapshot());

            let token = CancelToken::new();
            let on_frame = spin_frames(
                motion,
                token.clone(),
                SpinContext {
                    session: session.clone(),
                    snapshot: snapshot.clone(),
                    handles: handles.clone(),
                    pointer: pointer.clone(),
                    settings: live_settings.clone(),
                    player: player.clone(),
                    confetti_ref: confetti_ref.clone(),
                },
            );
            handles.borrow_mut().frame_loop = Some(FrameLoop::start(token, on_frame));
        })
    };

    let on_regenerate = {
        let session = session.clone();
        let snapshot = snapshot.clone();
        let pointer = pointer.clone();
        let error_message = error_message.clone();
        Callback::from(move |_: MouseEvent| {
            let result = session.borrow_mut().regenerate_prizes();
            match result {
                Ok(_) => {
                    error_message.set(String::new());
                    pointer.set(PointerState::default());
                }
                Err(blocked) => error_message.set(blocked.to_string()),
            }
            snapshot.set(session.borrow().snapshot());
        })
    };

    let on_settings_change = {
        let settings = settings.clone();
        let live_settings = live_settings.clone();
        Callback::from(move |next: FeedbackSettings| {
            *live_settings.borrow_mut() = next;
            save_feedback_settings(&next);
            settings.set(next);
        })
    };

    let snap = (*snapshot).clone();
    let catalog = catalog_group(snap.active_group).clone();

    html! {
        <div class={styles::MODAL_BACKDROP} onclick={close.reform(|_: MouseEvent| DismissTrigger::OutsideClick)}>
            <div ref={confetti_ref} class={styles::CONFETTI_LAYER}></div>
            <div
                class={styles::MODAL_PANEL}
                role="dialog"
                aria-modal="true"
                aria-labelledby="reward-wheel-title"
            >
                <button class={styles::MODAL_CLOSE} aria-label="Fechar" onclick={close.reform(|_: MouseEvent| DismissTrigger::CloseButton)}>
                    <svg xmlns="http://www.w3.org/2000/svg" class="h-5 w-5" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12" />
                    </svg>
                </button>

                <div class="text-center">
                    <h2 id="reward-wheel-title" class={styles::TEXT_H2}>{"🎡 Roleta Diária"}</h2>
                    <p class={styles::TEXT_SMALL}>{"Gire a roleta e ganhe prêmios pelo seu login de hoje!"}</p>
                </div>

                <SpinCounters
                    regular_spins={snap.regular_spins}
                    special_spins={snap.special_spins}
                    currency_balance={snap.currency_balance}
                />

                <div class="py-4">
                    <WheelView
                        rotation={snap.rotation}
                        catalog={catalog.clone()}
                        active_peg={pointer.active_peg}
                        pointer_tilt={pointer.tilt}
                        pointer_blinking={pointer.blinking}
                    />
                </div>

                <div class="w-full max-w-[300px]">
                    <SpinButton is_spinning={snap.is_spinning} can_spin={snap.can_spin} onclick={on_spin} />
                </div>

                <ResultDisplay prize={snap.last_prize.clone()} show_result={snap.show_result} />

                <div class="w-full max-w-[300px]">
                    <RegenerateButton
                        cost={snap.regeneration_cost}
                        regeneration_count={snap.regeneration_count}
                        can_regenerate={snap.can_regenerate}
                        onclick={on_regenerate}
                    />
                </div>

                if !error_message.is_empty() {
                    <div class={styles::ALERT_ERROR}>{(*error_message).clone()}</div>
                }

                <PrizeLegend {catalog} />

                <FeedbackToggles settings={*settings} on_change={on_settings_change} />
            </div>
        </div>
    }
}

/// Handles shared between the frame callbacks and timers of one spin.
struct SpinContext {
    session: Rc<RefCell<SpinSession>>,
    snapshot: UseStateHandle<SessionSnapshot>,
    handles: Rc<RefCell<SpinHandles>>,
    pointer: UseStateHandle<PointerState>,
    settings: Rc<RefCell<FeedbackSettings>>,
    player: Rc<RefCell<FeedbackPlayer>>,
    confetti_ref: NodeRef,
}

impl SpinContext {
    fn on_tick(&self, peg: usize, token: &CancelToken) {
        self.pointer.set(PointerState { active_peg: Some(peg), tilt: TICK_TILT_DEGREES, blinking: true });
        let settings = *self.settings.borrow();
        self.player.borrow_mut().tick(&settings);

        let pointer = self.pointer.clone();
        let token = token.clone();
        let revert = Timeout::new(TICK_PULSE_MS, move || {
            if !token.is_cancelled() {
                pointer.set(PointerState::default());
            }
        });
        // a newer tick replaces (and cancels) the pending revert
        self.handles.borrow_mut().tick_revert = Some(revert);
    }

    fn on_stopped(self, token: CancelToken) {
        self.session.borrow_mut().mark_stopped();
        self.snapshot.set(self.session.borrow().snapshot());

        let handles = self.handles.clone();
        let settle = Timeout::new(SETTLE_DELAY_MS, move || {
            if token.is_cancelled() {
                return;
            }
            self.resolve();
        });
        handles.borrow_mut().settle = Some(settle);
    }

    fn resolve(&self) {
        let prize = self.session.borrow_mut().resolve_prize();
        self.snapshot.set(self.session.borrow().snapshot());
        if prize.is_none() {
            return;
        }

        let settings = *self.settings.borrow();
        self.player.borrow_mut().celebrate(&settings);
        if !settings.confetti {
            return;
        }
        let (Some(container), Some(viewport)) = (self.confetti_ref.cast::<Element>(), Viewport::current()) else {
            return;
        };
        let palette: Vec<String> = self
            .session
            .borrow()
            .active_catalog()
            .iter()
            .map(|prize| prize.color_token.clone())
            .collect();
        spawn_confetti(&container, viewport, &palette);
    }
}

/// Builds the per-frame handler: step the motion, publish the rotation,
/// react to ticks and hand over to the settle delay once the wheel stops.
fn spin_frames(
    mut motion: SpinMotion,
    token: CancelToken,
    context: SpinContext,
) -> impl FnMut(f64) -> ControlFlow<()> + 'static {
    let mut context = Some(context);
    move |_timestamp| {
        let Some(ctx) = context.as_ref() else {
            return ControlFlow::Break(());
        };

        let outcome = motion.step();
        ctx.session.borrow_mut().record_frame(outcome.rotation);
        if outcome.tick.is_some() {
            // highlight the peg the pointer is touching, not the crossed boundary
            ctx.on_tick(peg_under_pointer(outcome.rotation), &token);
        }

        if outcome.finished {
            if let Some(ctx) = context.take() {
                ctx.on_stopped(token.clone());
            }
            return ControlFlow::Break(());
        }

        ctx.snapshot.set(ctx.session.borrow().snapshot());
        ControlFlow::Continue(())
    }
}
