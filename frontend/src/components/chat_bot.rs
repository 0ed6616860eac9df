use yew::prelude::*;
use web_sys::{HtmlElement, HtmlInputElement};

use crate::api::{self, AiError, ChatTurn};
use crate::flight::Flight;

const GREETING: &str =
    "Hallo! Ich bin der ConsentWerft Assistent. Wie kann ich Ihnen beim Thema Datenschutz, Cookies oder Tracking helfen?";
const FALLBACK: &str =
    "Entschuldigung, ich habe gerade Verbindungsprobleme. Bitte versuchen Sie es später noch einmal.";

pub enum ChatBotMsg {
    Toggle,
    SetInput(String),
    Send,
    Reply(Result<String, AiError>),
}

/// A rendered bubble. `local` marks text the panel produced itself, which
/// is shown but never forwarded as something the model said.
#[derive(Debug, Clone, PartialEq)]
struct Entry {
    turn: ChatTurn,
    local: bool,
}

impl Entry {
    fn remote(turn: ChatTurn) -> Self {
        Self { turn, local: false }
    }
}

fn forwarded_history(transcript: &[Entry]) -> Vec<ChatTurn> {
    transcript
        .iter()
        .filter(|entry| !entry.local)
        .map(|entry| entry.turn.clone())
        .collect()
}

pub struct ChatBot {
    open: bool,
    input: String,
    // the greeting is rendered separately and never sent
    transcript: Vec<Entry>,
    flight: Flight,
    bottom: NodeRef,
}

impl ChatBot {
    fn can_send(&self) -> bool {
        !self.flight.is_loading() && !self.input.trim().is_empty()
    }

    fn render_entry(entry: &Entry) -> Html {
        let turn = &entry.turn;
        let class = match turn.role {
            api::ChatRole::User => "chat-bubble user",
            api::ChatRole::Model => "chat-bubble model",
        };
        html! {
            <div class={class}>{ &turn.text }</div>
        }
    }
}

impl Component for ChatBot {
    type Message = ChatBotMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            open: false,
            input: String::new(),
            transcript: Vec::new(),
            flight: Flight::default(),
            bottom: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ChatBotMsg::Toggle => {
                self.open = !self.open;
                true
            }
            ChatBotMsg::SetInput(input) => {
                self.input = input;
                true
            }
            ChatBotMsg::Send => {
                if !self.can_send() || !self.flight.begin() {
                    return false;
                }

                let message = self.input.trim().to_string();
                let history = forwarded_history(&self.transcript);
                self.transcript.push(Entry::remote(ChatTurn::user(message.clone())));
                self.input.clear();

                ctx.link().send_future(async move {
                    ChatBotMsg::Reply(api::send_chat(&history, &message).await)
                });
                true
            }
            ChatBotMsg::Reply(result) => {
                self.flight.finish();
                let entry = match result {
                    Ok(text) => Entry::remote(ChatTurn::model(text)),
                    Err(e) => {
                        log::error!("Chat request failed: {}", e);
                        Entry {
                            turn: ChatTurn::model(FALLBACK),
                            local: true,
                        }
                    }
                };
                self.transcript.push(entry);
                true
            }
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if let Some(bottom) = self.bottom.cast::<HtmlElement>() {
            bottom.scroll_into_view();
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let toggle = ctx.link().callback(|_| ChatBotMsg::Toggle);
        let send = ctx.link().callback(|_| ChatBotMsg::Send);
        let on_input = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            ChatBotMsg::SetInput(input.value())
        });
        let on_keydown = ctx.link().batch_callback(|e: KeyboardEvent| {
            (e.key() == "Enter").then_some(ChatBotMsg::Send)
        });

        html! {
            <div class={classes!("chat-bot", self.open.then(|| "expanded"))}>
                if self.open {
                    <div class="chat-panel">
                        <div class="chat-header">
                            <span>{"ConsentWerft Assistent"}</span>
                            <button onclick={toggle.clone()} aria-label="Schließen">{"✕"}</button>
                        </div>
                        <div class="chat-messages">
                            <div class="chat-bubble model">{GREETING}</div>
                            { for self.transcript.iter().map(Self::render_entry) }
                            if self.flight.is_loading() {
                                <div class="chat-bubble model thinking">{"Denkt nach..."}</div>
                            }
                            <div ref={self.bottom.clone()}></div>
                        </div>
                        <div class="chat-input">
                            <input
                                type="text"
                                placeholder="Frage zu Cookies, Consent Mode..."
                                value={self.input.clone()}
                                oninput={on_input}
                                onkeydown={on_keydown}
                            />
                            <button onclick={send} disabled={!self.can_send()}>{"Senden"}</button>
                        </div>
                        <p class="chat-disclaimer">{"Keine Rechtsberatung."}</p>
                    </div>
                } else {
                    <button onclick={toggle} class="chat-toggle" aria-label="Assistent öffnen">{"💬"}</button>
                }
                <style>
                    {r#"
                    .chat-bot {
                        position: fixed;
                        right: 1.5rem;
                        bottom: 1.5rem;
                        z-index: 90;
                    }
                    .chat-toggle {
                        width: 56px;
                        height: 56px;
                        border-radius: 50%;
                        border: none;
                        font-size: 1.5rem;
                        cursor: pointer;
                        background: linear-gradient(135deg, #6A0DAD, #FF4FA2);
                        box-shadow: 0 10px 25px rgba(106, 13, 173, 0.3);
                    }
                    .chat-panel {
                        width: 340px;
                        max-height: 520px;
                        display: flex;
                        flex-direction: column;
                        background: #fff;
                        border-radius: 16px;
                        box-shadow: 0 20px 40px rgba(0, 0, 0, 0.15);
                        overflow: hidden;
                    }
                    .chat-header {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        padding: 1rem;
                        color: #fff;
                        background: linear-gradient(90deg, #6A0DAD, #FF4FA2);
                    }
                    .chat-header button {
                        background: none;
                        border: none;
                        color: #fff;
                        cursor: pointer;
                    }
                    .chat-messages {
                        flex: 1;
                        overflow-y: auto;
                        padding: 1rem;
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                    }
                    .chat-bubble {
                        max-width: 85%;
                        padding: 0.6rem 0.9rem;
                        border-radius: 12px;
                        font-size: 0.9rem;
                        white-space: pre-wrap;
                    }
                    .chat-bubble.model {
                        align-self: flex-start;
                        background: #f5f5f5;
                        color: #171717;
                    }
                    .chat-bubble.user {
                        align-self: flex-end;
                        background: #6A0DAD;
                        color: #fff;
                    }
                    .chat-bubble.thinking {
                        font-style: italic;
                        color: #737373;
                    }
                    .chat-input {
                        display: flex;
                        gap: 0.5rem;
                        padding: 0.75rem;
                        border-top: 1px solid #e5e5e5;
                    }
                    .chat-input input {
                        flex: 1;
                        padding: 0.5rem;
                        border: 1px solid #d4d4d4;
                        border-radius: 8px;
                    }
                    .chat-input button {
                        padding: 0.5rem 0.9rem;
                        border: none;
                        border-radius: 8px;
                        background: #171717;
                        color: #fff;
                        cursor: pointer;
                    }
                    .chat-input button:disabled {
                        opacity: 0.5;
                        cursor: default;
                    }
                    .chat-disclaimer {
                        margin: 0;
                        padding: 0 0.75rem 0.5rem;
                        font-size: 0.7rem;
                        color: #a3a3a3;
                    }
                    "#}
                </style>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_apology_is_not_forwarded() {
        let transcript = vec![
            Entry::remote(ChatTurn::user("Was ist TTDSG?")),
            Entry {
                turn: ChatTurn::model(FALLBACK),
                local: true,
            },
            Entry::remote(ChatTurn::user("Und Consent Mode?")),
            Entry::remote(ChatTurn::model("Consent Mode v2 steuert...")),
        ];

        assert_eq!(
            forwarded_history(&transcript),
            vec![
                ChatTurn::user("Was ist TTDSG?"),
                ChatTurn::user("Und Consent Mode?"),
                ChatTurn::model("Consent Mode v2 steuert..."),
            ]
        );
    }
}
