//! Overlay host for the create-entity dialogs.
//!
//! `open` controls mount/unmount of the overlay and its children. The only
//! close affordance is the corner button, which emits `on_close` once per
//! open/close cycle; clicking the backdrop is deliberately not wired.

use uuid::Uuid;
use yew::{html, Callback, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct ModalHostProps {
    pub open: bool,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Html,
}

pub struct ModalHost {
    pub id: String,
}

impl Component for ModalHost {
    type Message = ();
    type Properties = ModalHostProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("modal-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if !ctx.props().open {
            return Html::default();
        }
        let on_close = ctx.props().on_close.clone();

        html! {
            <div
                id={self.id.clone()}
                style="position:fixed;top:0;left:0;width:100vw;height:100vh;background:rgba(0,0,0,0.5);z-index:9999;display:flex;align-items:center;justify-content:center;"
            >
                <div style="position:relative;background:#fff;border-radius:8px;box-shadow:0 0 8px #ccc;padding:4rem 8rem;">
                    <button
                        style="position:absolute;top:8px;right:12px;font-size:1.2rem;font-weight:bold;background:none;border:none;cursor:pointer;"
                        onclick={Callback::from(move |_| on_close.emit(()))}
                    >
                        { "✕" }
                    </button>
                    { ctx.props().children.clone() }
                </div>
            </div>
        }
    }
}
