use crate::canvas::Painter;
use crate::fetch::{self, FetchError};
use crate::theme::Theme;
use crate::utils::*;
use clap::Args;
use hangman_core as game;
use hangman_protocol as protocol;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Seed for the offline word list instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Origin of the hint proxy
    #[arg(long, default_value = protocol::DEFAULT_PROXY_ORIGIN)]
    pub proxy_url: String,

    /// Endpoint returning a JSON array with one random word
    #[arg(long, default_value = protocol::WORD_API_URL)]
    pub word_api_url: String,

    /// Force a theme instead of following the browser
    #[arg(long, value_enum)]
    pub theme: Option<Theme>,
}

#[derive(Debug)]
pub(crate) enum Msg {
    Letter(game::Letter),
    Restart,
    ClosePopup,
    WordFetched {
        round: game::RoundId,
        result: Result<String, FetchError>,
    },
    HintFetched {
        round: game::RoundId,
        result: Result<String, FetchError>,
    },
}

#[derive(Properties, Clone, PartialEq)]
struct LetterProps {
    letter: game::Letter,
    enabled: bool,
    callback: Callback<game::Letter>,
}

#[function_component(LetterButton)]
fn letter_button(props: &LetterProps) -> Html {
    let LetterProps {
        letter,
        enabled,
        callback,
    } = props.clone();

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("letter {} clicked", letter);
        callback.emit(letter);
    });

    html! {
        <button class="letter" disabled={!enabled} {onclick}>{letter.to_string()}</button>
    }
}

/// A failed lookup is logged and shown as an unavailable hint.
fn hint_definition(result: Result<String, FetchError>) -> Option<String> {
    result
        .map_err(|err| log::error!("Error fetching hint: {}", err))
        .ok()
}

pub(crate) struct GameView {
    session: game::Session,
    theme: Theme,
    canvas_ref: NodeRef,
    painted_round: Option<game::RoundId>,
    progress: game::FigureProgress,
}

impl GameView {
    /// Runs a session command in the background, its result comes back as a message.
    fn dispatch(ctx: &Context<Self>, command: game::Command) {
        use game::Command::*;

        let props = ctx.props();
        match command {
            FetchWord { round, attempt } => {
                log::debug!("round {}: fetching word (attempt {})", round, attempt);
                let url = props.word_api_url.clone();
                ctx.link().send_future(async move {
                    Msg::WordFetched {
                        round,
                        result: fetch::random_word(&url).await,
                    }
                });
            }
            FetchHint { round, word } => {
                log::debug!("round {}: fetching hint", round);
                let origin = props.proxy_url.clone();
                ctx.link().send_future(async move {
                    Msg::HintFetched {
                        round,
                        result: fetch::definition(&origin, &word).await,
                    }
                });
            }
        }
    }

    fn dispatch_opt(ctx: &Context<Self>, command: Option<game::Command>) -> bool {
        match command {
            Some(command) => {
                Self::dispatch(ctx, command);
                true
            }
            None => false,
        }
    }

    /// Clears the canvas when a new round started, then draws only the steps not on it yet.
    fn paint(&mut self) {
        let Some(canvas) = self.canvas_ref.cast::<HtmlCanvasElement>() else {
            log::warn!("canvas not mounted");
            return;
        };
        let Some(painter) = Painter::new(&canvas, self.theme) else {
            log::error!("canvas has no 2d context");
            return;
        };

        let round_id = self.session.round_id();
        if self.painted_round != Some(round_id) {
            painter.clear();
            painter.draw_gallows();
            self.progress.reset();
            self.painted_round = Some(round_id);
        }

        for step in self.progress.advance(self.session.lives_lost()) {
            painter.draw_step(step);
        }
    }

    fn view_popup(&self, ctx: &Context<Self>) -> Html {
        let Some(message) = self
            .session
            .end_message()
            .filter(|_| self.session.popup_visible())
        else {
            return html! {};
        };

        let style = popup_style(self.theme.tone_color(message.tone));
        let cb_close = ctx.link().callback(|_: MouseEvent| Msg::ClosePopup);

        html! {
            <Modal>
                <div id="popup" class="popup">
                    <article>
                        <p id="popupMessage" {style}>{message.text}</p>
                        <button id="closePopup" onclick={cb_close}>{"Close"}</button>
                    </article>
                </div>
            </Modal>
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let mut session = game::Session::new(props.seed.unwrap_or_else(js_random_seed));
        let command = session.start_round();
        Self::dispatch(ctx, command);

        Self {
            session,
            theme: Theme::resolve(props.theme),
            canvas_ref: NodeRef::default(),
            painted_round: None,
            progress: game::FigureProgress::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Letter(letter) => match self.session.on_letter_activated(letter) {
                Ok(outcome) => {
                    if outcome.is_final() {
                        log::info!("round {} ended: {:?}", self.session.round_id(), outcome);
                    }
                    outcome.has_update()
                }
                Err(err) => {
                    log::warn!("guess {} rejected: {}", letter, err);
                    false
                }
            },
            Restart => {
                log::debug!("play again");
                let command = self.session.on_restart_activated();
                Self::dispatch_opt(ctx, command)
            }
            ClosePopup => self.session.dismiss_popup(),
            WordFetched { round, result } => {
                let command = match result {
                    Ok(word) => self.session.on_word_fetched(round, &word),
                    Err(err) => {
                        log::error!("Error fetching word: {}", err);
                        self.session.on_word_failed(round)
                    }
                };
                Self::dispatch_opt(ctx, command)
            }
            HintFetched { round, result } => {
                self.session.on_hint_fetched(round, hint_definition(result))
            }
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        self.paint();
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let (width, height) = game::CANVAS_SIZE;
        let lives = lives_label(self.session.lives_remaining());
        let hint_text = self.session.hint_text();
        let masked_word = self.session.masked_word();
        let cb_letter = ctx.link().callback(Msg::Letter);
        let cb_restart = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Msg::Restart
        });

        html! {
            <div class="hangman">
                <canvas
                    id="hangmanCanvas"
                    ref={self.canvas_ref.clone()}
                    width={width.to_string()}
                    height={height.to_string()}
                />
                <p id="wordDisplay" class="word">{masked_word}</p>
                <p id="hint-text" class="hint">{hint_text}</p>
                <p id="livesCount" class="lives">{lives}</p>
                <nav id="letterButtons">
                    {
                        for game::Letter::all().map(|letter| {
                            let enabled = self.session.is_letter_enabled(letter);
                            let callback = cb_letter.clone();
                            html! {
                                <LetterButton key={letter.index()} {letter} {enabled} {callback}/>
                            }
                        })
                    }
                </nav>
                if self.session.restart_visible() {
                    <button id="playAgainButton" onclick={cb_restart}>{"Play Again"}</button>
                }
                { self.view_popup(ctx) }
            </div>
        }
    }
}
