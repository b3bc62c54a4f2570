pub mod styles;
pub mod hooks;
pub mod components;
pub mod config;

use yew::prelude::*;
use crate::components::RewardWheelModal;

#[function_component(App)]
pub fn app() -> Html {
    let wheel_open = use_state(|| false);

    let open_wheel = {
        let wheel_open = wheel_open.clone();
        Callback::from(move |_: MouseEvent| wheel_open.set(true))
    };

    let on_open_change = {
        let wheel_open = wheel_open.clone();
        Callback::from(move |open: bool| wheel_open.set(open))
    };

    html! {
        <div class={styles::CONTAINER}>
            <div class={styles::CONTAINER_SM}>
                <div class={classes!(styles::CARD, "text-center", "space-y-4")}>
                    <div class="text-5xl">{"🎁"}</div>
                    <h3 class={styles::CARD_TITLE}>{"Login diário"}</h3>
                    <p class={styles::CARD_TEXT}>
                        {"Volte todos os dias para girar a roleta e ganhar XP, moedas e itens especiais."}
                    </p>
                    <button class={styles::BUTTON_PRIMARY} onclick={open_wheel}>
                        {"🎡 Abrir Roleta"}
                    </button>
                </div>
            </div>
            <RewardWheelModal open={*wheel_open} {on_open_change} />
        </div>
    }
}
