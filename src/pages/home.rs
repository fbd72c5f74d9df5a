use yew::prelude::*;

use crate::components::chat_widget::ChatWidget;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="home">
            <style>
                {r#"
                    .home {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        background: #fff;
                        color: #000;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    }
                    .home-nav {
                        display: flex;
                        justify-content: center;
                        padding: 1.5rem;
                        border-bottom: 1px solid #e5e5e5;
                        font-size: 1.6rem;
                        letter-spacing: 0.3em;
                        font-weight: 700;
                    }
                    .home-hero {
                        flex: 1;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        padding: 4rem 1.5rem;
                        gap: 1rem;
                    }
                    .home-hero h1 {
                        font-size: 2.6rem;
                        font-weight: 400;
                        margin: 0;
                    }
                    .home-hero p {
                        color: #555;
                        max-width: 520px;
                        line-height: 1.6;
                        margin: 0;
                    }
                    .home-footer {
                        padding: 1.5rem;
                        text-align: center;
                        color: #888;
                        font-size: 0.8rem;
                        border-top: 1px solid #e5e5e5;
                    }
                "#}
            </style>
            <header class="home-nav">{"L'ORÉAL"}</header>
            <main class="home-hero">
                <h1>{"Beauty for all"}</h1>
                <p>
                    {"Skincare, makeup and haircare backed by science. Not sure where to start? Ask our assistant for a routine that fits you."}
                </p>
            </main>
            <footer class="home-footer">{"Demo storefront. Not affiliated with L'Oréal."}</footer>
            <ChatWidget />
        </div>
    }
}
