use gloo_timers::callback::Timeout;
use log::{info, warn};
use web_sys::{Element, HtmlInputElement};
use yew::prelude::*;

use crate::chat::client::{CompletionClient, HttpCompletionClient};
use crate::chat::controller::ChatController;
use crate::chat::error::CompletionError;
use crate::chat::models::Message;
use crate::chat::transcript::{ScrollTracker, TranscriptLine, FAILURE_TEXT, TYPING_TEXT};
use crate::config;

fn default_endpoint() -> AttrValue {
    AttrValue::from(config::get_completion_url())
}

fn default_system_instruction() -> AttrValue {
    AttrValue::from(config::SYSTEM_INSTRUCTION)
}

#[derive(Properties, PartialEq)]
pub struct ChatWidgetProps {
    #[prop_or_else(default_endpoint)]
    pub endpoint: AttrValue,
    #[prop_or_else(default_system_instruction)]
    pub system_instruction: AttrValue,
    #[prop_or(config::REQUEST_TIMEOUT_MS)]
    pub timeout_ms: u32,
    #[prop_or(config::NOTICE_LIFETIME_MS)]
    pub notice_ms: u32,
}

pub enum ChatWidgetMsg {
    Toggle,
    SetInput(String),
    Submit,
    Completed(Result<Message, CompletionError>),
    ExpireNotice(u32),
}

pub struct ChatWidget {
    controller: ChatController,
    client: HttpCompletionClient,
    input: String,
    messages_ref: NodeRef,
    scroll: ScrollTracker,
    notice_timer: Option<Timeout>,
}

impl Component for ChatWidget {
    type Message = ChatWidgetMsg;
    type Properties = ChatWidgetProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        Self {
            controller: ChatController::new(props.system_instruction.to_string()),
            client: HttpCompletionClient::new(props.endpoint.to_string(), props.timeout_ms),
            input: String::new(),
            messages_ref: NodeRef::default(),
            scroll: ScrollTracker::default(),
            notice_timer: None,
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        if props.endpoint != old_props.endpoint || props.timeout_ms != old_props.timeout_ms {
            self.client = HttpCompletionClient::new(props.endpoint.to_string(), props.timeout_ms);
        }
        // The system instruction is fixed for the life of a conversation.
        false
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ChatWidgetMsg::Toggle => {
                self.controller.toggle();
                // The list is remounted on open and must start at the newest entry.
                self.scroll.reset();
                true
            }
            ChatWidgetMsg::SetInput(text) => {
                self.input = text;
                true
            }
            ChatWidgetMsg::Submit => {
                let snapshot = match self.controller.begin_submit(&self.input) {
                    Ok(snapshot) => snapshot,
                    Err(_) => return false,
                };
                self.input.clear();
                self.notice_timer = None;

                info!("Sending conversation of {} messages", snapshot.len());
                let client = self.client.clone();
                ctx.link().send_future(async move {
                    ChatWidgetMsg::Completed(client.complete(&snapshot).await)
                });
                true
            }
            ChatWidgetMsg::Completed(result) => {
                self.notice_timer = match self.controller.finish(result) {
                    Ok(()) => None,
                    Err((notice, _)) => {
                        let link = ctx.link().clone();
                        Some(Timeout::new(ctx.props().notice_ms, move || {
                            link.send_message(ChatWidgetMsg::ExpireNotice(notice));
                        }))
                    }
                };
                true
            }
            ChatWidgetMsg::ExpireNotice(notice) => self.controller.expire_notice(notice),
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if !self.controller.is_open() || !self.scroll.needs_scroll(self.controller.transcript()) {
            return;
        }
        match self.messages_ref.cast::<Element>() {
            Some(list) => list.set_scroll_top(list.scroll_height()),
            None => warn!("Chat message list is not mounted, cannot scroll to latest entry"),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let toggle = ctx.link().callback(|_| ChatWidgetMsg::Toggle);
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            ChatWidgetMsg::Submit
        });
        let oninput = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            ChatWidgetMsg::SetInput(input.value())
        });
        let is_open = self.controller.is_open();

        html! {
            <div class={classes!("chatbot", is_open.then(|| "open"))}>
                <style>{ CHAT_STYLES }</style>
                <button
                    class="chatbot-toggle"
                    onclick={toggle}
                    aria-expanded={is_open.to_string()}
                >
                    { self.controller.visibility().toggle_label() }
                </button>

                if is_open {
                    <div class="chatbot-window">
                        <div class="chatbot-messages" ref={self.messages_ref.clone()} aria-live="polite">
                            { for self.controller.transcript().iter().map(view_line) }
                        </div>
                        <form class="chatbot-form" {onsubmit}>
                            <input
                                type="text"
                                placeholder="Ask me anything..."
                                value={self.input.clone()}
                                {oninput}
                            />
                            <button type="submit" disabled={self.controller.is_busy()}>
                                { "Send" }
                            </button>
                        </form>
                    </div>
                }
            </div>
        }
    }
}

fn view_line(line: &TranscriptLine) -> Html {
    match line {
        TranscriptLine::Turn { speaker, text } => html! {
            <div class={speaker.css_class()}>
                <b>{ format!("{}:", speaker.label()) }</b>{ " " }{ text }
            </div>
        },
        TranscriptLine::Typing => html! {
            <div class="chat-line chat-line-typing">{ TYPING_TEXT }</div>
        },
        TranscriptLine::Failure => html! {
            <div class="chat-line chat-line-error" role="alert">{ FAILURE_TEXT }</div>
        },
    }
}

const CHAT_STYLES: &str = r#"
    .chatbot {
        position: fixed;
        right: 24px;
        bottom: 24px;
        z-index: 1000;
        display: flex;
        flex-direction: column;
        align-items: flex-end;
        gap: 12px;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    }
    .chatbot-toggle {
        background: #000;
        color: #fff;
        border: none;
        border-radius: 24px;
        padding: 12px 20px;
        cursor: pointer;
        font-size: 0.95rem;
        letter-spacing: 0.05em;
    }
    .chatbot-window {
        order: -1;
        display: flex;
        flex-direction: column;
        width: 340px;
        height: 440px;
        background: #fff;
        border: 1px solid #e5e5e5;
        border-radius: 12px;
        box-shadow: 0 16px 32px rgba(0,0,0,0.15);
        overflow: hidden;
    }
    .chatbot-messages {
        flex: 1;
        overflow-y: auto;
        padding: 12px 16px;
        color: #111;
        font-size: 0.9rem;
    }
    .chat-line { margin: 6px 0; white-space: pre-wrap; word-wrap: break-word; }
    .chat-line-user { text-align: right; }
    .chat-line-ai { text-align: left; }
    .chat-line-typing { color: #888; }
    .chat-line-error { color: red; }
    .chatbot-form {
        display: flex;
        border-top: 1px solid #e5e5e5;
    }
    .chatbot-form input {
        flex: 1;
        border: none;
        padding: 12px;
        font-size: 0.9rem;
        outline: none;
    }
    .chatbot-form button {
        border: none;
        background: #000;
        color: #fff;
        padding: 0 18px;
        cursor: pointer;
    }
    .chatbot-form button:disabled {
        background: #999;
        cursor: default;
    }
"#;
