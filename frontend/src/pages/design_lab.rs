use yew::prelude::*;
use web_sys::{DragEvent, File, HtmlInputElement, HtmlTextAreaElement};

use crate::api::{self, AiError, ImageMode, ImageSize};
use crate::content::DESIGN_EXAMPLES;
use crate::flight::Flight;
use crate::upload::{DataUrl, PendingRead, UploadError, UploadPolicy};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabMode {
    Banner,
    Edit,
    Hq,
}

impl LabMode {
    const ALL: [LabMode; 3] = [Self::Banner, Self::Edit, Self::Hq];

    fn label(self) -> &'static str {
        match self {
            Self::Banner => "🪄 KI-Banner",
            Self::Edit => "⬆️ Bearbeiten",
            Self::Hq => "🖥️ HQ-Bild",
        }
    }
}

pub enum DesignLabMsg {
    SetMode(LabMode),
    SetPrompt(String),
    SetSize(ImageSize),
    UseExample(&'static str),
    Refine,
    Refined(u32, Result<String, AiError>),
    Generate,
    Edit,
    ImageReady(u32, Result<DataUrl, AiError>),
    FilePicked(File),
    FileLoaded(u32, Result<DataUrl, UploadError>),
    Dragging(bool),
    DismissError,
    RecheckCredential,
    CredentialChecked(Result<bool, AiError>),
}

pub struct DesignLab {
    mode: LabMode,
    prompt: String,
    size: ImageSize,
    image: Option<DataUrl>,
    error: Option<String>,
    dragging: bool,
    credential_ok: bool,
    policy: UploadPolicy,
    // separate guards: refining never blocks on a running generation's flag
    // and the other way round, though the view disables both while either runs
    generating: Flight,
    refining: Flight,
    pending_read: Option<PendingRead>,
    // bumped on every mode switch; replies from an older mode are dropped
    epoch: u32,
}

impl DesignLab {
    fn busy(&self) -> bool {
        self.generating.is_loading() || self.refining.is_loading() || self.pending_read.is_some()
    }

    fn has_prompt(&self) -> bool {
        !self.prompt.trim().is_empty()
    }

    fn fail(&mut self, err: AiError) {
        if err == AiError::MissingCredential {
            self.credential_ok = false;
        }
        log::error!("Design lab request failed: {:?}", err);
        self.error = Some(err.to_string());
    }

    fn switch_mode(&mut self, mode: LabMode) {
        self.mode = mode;
        self.prompt.clear();
        self.image = None;
        self.error = None;
        self.dragging = false;
        self.pending_read = None;
        self.epoch = self.epoch.wrapping_add(1);
    }

    fn check_credential(ctx: &Context<Self>) {
        ctx.link().send_future(async {
            DesignLabMsg::CredentialChecked(api::ai_status().await)
        });
    }

    fn view_mode_tabs(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="lab-tabs" role="tablist">
                { for LabMode::ALL.iter().map(|mode| {
                    let mode = *mode;
                    let active = self.mode == mode;
                    html! {
                        <button
                            class={classes!("lab-tab", active.then(|| "active"))}
                            aria-pressed={active.to_string()}
                            onclick={ctx.link().callback(move |_| DesignLabMsg::SetMode(mode))}
                        >
                            {mode.label()}
                        </button>
                    }
                }) }
            </div>
        }
    }

    fn view_prompt(&self, ctx: &Context<Self>, placeholder: &'static str) -> Html {
        let on_input = ctx.link().callback(|e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            DesignLabMsg::SetPrompt(area.value())
        });
        html! {
            <div class="lab-prompt">
                <label for="lab-prompt">{"Prompt (Design-Beschreibung)"}</label>
                <textarea
                    id="lab-prompt"
                    value={self.prompt.clone()}
                    placeholder={placeholder}
                    oninput={on_input}
                />
                <button
                    class="ghost-button"
                    onclick={ctx.link().callback(|_| DesignLabMsg::Refine)}
                    disabled={self.busy() || !self.has_prompt()}
                >
                    if self.refining.is_loading() {
                        <span class="spinner"></span>
                    }
                    {"🧠 Mit KI verfeinern"}
                </button>
            </div>
        }
    }

    fn view_upload_zone(&self, ctx: &Context<Self>) -> Html {
        let on_change = ctx.link().batch_callback(|e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let file = input.files().and_then(|files| files.get(0));
            // allow picking the same file again
            input.set_value("");
            file.map(DesignLabMsg::FilePicked)
        });
        let on_drag_over = ctx.link().callback(|e: DragEvent| {
            e.prevent_default();
            e.stop_propagation();
            DesignLabMsg::Dragging(true)
        });
        let on_drag_leave = ctx.link().callback(|e: DragEvent| {
            e.prevent_default();
            e.stop_propagation();
            DesignLabMsg::Dragging(false)
        });
        let on_drop = ctx.link().batch_callback(|e: DragEvent| {
            e.prevent_default();
            e.stop_propagation();
            let file = e
                .data_transfer()
                .and_then(|transfer| transfer.files())
                .and_then(|files| files.get(0));
            let mut msgs = vec![DesignLabMsg::Dragging(false)];
            msgs.extend(file.map(DesignLabMsg::FilePicked));
            msgs
        });

        html! {
            <label
                class={classes!("upload-zone", self.dragging.then(|| "dragging"))}
                ondragover={on_drag_over}
                ondragleave={on_drag_leave}
                ondrop={on_drop}
            >
                <input type="file" accept="image/*" onchange={on_change} hidden={true} />
                <span class="upload-icon">{"📤"}</span>
                <p>{"Bild hierher ziehen oder klicken"}</p>
                <small>{format!("JPG, PNG, WebP · max. {}MB", self.policy.max_bytes / (1024 * 1024))}</small>
            </label>
        }
    }

    fn view_controls(&self, ctx: &Context<Self>) -> Html {
        if !self.credential_ok {
            return html! {
                <div class="credential-gate">
                    <p>{"Der KI-Zugang ist nicht eingerichtet oder ungültig. Sobald der Schlüssel auf dem Server hinterlegt ist, können Sie es erneut versuchen."}</p>
                    <button
                        class="primary-button"
                        onclick={ctx.link().callback(|_| DesignLabMsg::RecheckCredential)}
                    >
                        {"Zugang erneut prüfen"}
                    </button>
                </div>
            };
        }

        let loading = self.generating.is_loading();
        match self.mode {
            LabMode::Banner => html! {
                <>
                    { self.view_prompt(ctx, "z.B. Minimalistischer Cookie-Banner, Dark Mode, Buttons in Neon-Pink, hohe Transparenz...") }
                    <button
                        class="primary-button wide"
                        onclick={ctx.link().callback(|_| DesignLabMsg::Generate)}
                        disabled={self.busy() || !self.has_prompt()}
                    >
                        { if loading { "Generiere..." } else { "🪄 Design generieren" } }
                    </button>
                </>
            },
            LabMode::Edit => html! {
                <>
                    { self.view_upload_zone(ctx) }
                    { self.view_prompt(ctx, "z.B. Mache die Buttons gleich groß und ändere die Farbe auf Violett...") }
                    <button
                        class="primary-button wide"
                        onclick={ctx.link().callback(|_| DesignLabMsg::Edit)}
                        disabled={self.busy() || !self.has_prompt() || self.image.is_none()}
                    >
                        { if loading { "Bearbeite..." } else { "✏️ Bild bearbeiten" } }
                    </button>
                </>
            },
            LabMode::Hq => html! {
                <>
                    { self.view_prompt(ctx, "z.B. Fotorealistisches Büro mit Laptop, auf dem ein Consent-Banner zu sehen ist...") }
                    <div class="size-picker">
                        <span>{"Auflösung"}</span>
                        { for ImageSize::ALL.iter().map(|size| {
                            let size = *size;
                            html! {
                                <button
                                    class={classes!("size-option", (self.size == size).then(|| "active"))}
                                    onclick={ctx.link().callback(move |_| DesignLabMsg::SetSize(size))}
                                >
                                    {size.label()}
                                </button>
                            }
                        }) }
                    </div>
                    <button
                        class="primary-button wide"
                        onclick={ctx.link().callback(|_| DesignLabMsg::Generate)}
                        disabled={self.busy() || !self.has_prompt()}
                    >
                        { if loading { "Generiere..." } else { "🖥️ HQ-Bild generieren" } }
                    </button>
                </>
            },
        }
    }

    fn view_preview(&self) -> Html {
        match &self.image {
            Some(image) => {
                let href = image.to_string();
                html! {
                    <div class="lab-preview">
                        <img src={href.clone()} alt="Ergebnis" />
                        <a class="download-link" href={href} download={format!("consentwerft-design.{}", image.extension())}>
                            {"⬇️ Herunterladen"}
                        </a>
                    </div>
                }
            }
            None if self.generating.is_loading() => html! {
                <div class="lab-preview empty"><span class="spinner"></span><p>{"KI arbeitet..."}</p></div>
            },
            None => html! {
                <div class="lab-preview empty"><p>{"Hier erscheint Ihr Ergebnis."}</p></div>
            },
        }
    }
}

impl Component for DesignLab {
    type Message = DesignLabMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        Self::check_credential(ctx);
        Self {
            mode: LabMode::Banner,
            prompt: String::new(),
            size: ImageSize::default(),
            image: None,
            error: None,
            dragging: false,
            credential_ok: true,
            policy: UploadPolicy::default(),
            generating: Flight::default(),
            refining: Flight::default(),
            pending_read: None,
            epoch: 0,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            DesignLabMsg::SetMode(mode) => {
                if mode == self.mode {
                    return false;
                }
                self.switch_mode(mode);
                true
            }
            DesignLabMsg::SetPrompt(prompt) => {
                self.prompt = prompt;
                true
            }
            DesignLabMsg::SetSize(size) => {
                self.size = size;
                true
            }
            DesignLabMsg::UseExample(prompt) => {
                if self.mode != LabMode::Banner {
                    self.switch_mode(LabMode::Banner);
                }
                self.prompt = prompt.to_string();
                true
            }
            DesignLabMsg::Refine => {
                if !self.has_prompt() {
                    self.error = Some("Bitte geben Sie zuerst einen Basis-Prompt ein.".to_string());
                    return true;
                }
                if self.generating.is_loading() || !self.refining.begin() {
                    return false;
                }
                self.error = None;
                let draft = self.prompt.clone();
                let epoch = self.epoch;
                ctx.link().send_future(async move {
                    DesignLabMsg::Refined(epoch, api::refine_prompt(&draft).await)
                });
                true
            }
            DesignLabMsg::Refined(epoch, result) => {
                self.refining.finish();
                if epoch != self.epoch {
                    return true;
                }
                match result {
                    Ok(text) => self.prompt = text,
                    Err(AiError::MissingCredential) => self.fail(AiError::MissingCredential),
                    Err(e) => {
                        log::error!("Prompt refinement failed: {}", e);
                        self.error = Some("Prompt-Optimierung fehlgeschlagen. (Ggf. API Key prüfen)".to_string());
                    }
                }
                true
            }
            DesignLabMsg::Generate => {
                if !self.has_prompt() || self.refining.is_loading() || !self.generating.begin() {
                    return false;
                }
                let (mode, size) = match self.mode {
                    LabMode::Hq => (ImageMode::Hq, self.size),
                    _ => (ImageMode::Banner, ImageSize::default()),
                };
                self.error = None;
                self.image = None;
                let prompt = self.prompt.clone();
                let epoch = self.epoch;
                ctx.link().send_future(async move {
                    DesignLabMsg::ImageReady(epoch, api::generate_image(&prompt, mode, size).await)
                });
                true
            }
            DesignLabMsg::Edit => {
                let Some(source) = self.image.clone().filter(|_| self.has_prompt()) else {
                    self.error = Some(
                        "Bitte laden Sie zuerst ein Bild hoch und geben Sie einen Prompt ein.".to_string(),
                    );
                    return true;
                };
                if self.refining.is_loading() || !self.generating.begin() {
                    return false;
                }
                self.error = None;
                let prompt = self.prompt.clone();
                let epoch = self.epoch;
                ctx.link().send_future(async move {
                    DesignLabMsg::ImageReady(epoch, api::edit_image(&prompt, &source).await)
                });
                true
            }
            DesignLabMsg::ImageReady(epoch, result) => {
                self.generating.finish();
                if epoch != self.epoch {
                    return true;
                }
                match result {
                    Ok(image) => self.image = Some(image),
                    Err(e) => self.fail(e),
                }
                true
            }
            DesignLabMsg::FilePicked(file) => {
                if self.busy() {
                    return false;
                }
                let epoch = self.epoch;
                let done = ctx
                    .link()
                    .callback(move |result| DesignLabMsg::FileLoaded(epoch, result));
                match self.policy.read(&file, done) {
                    Ok(pending) => {
                        self.error = None;
                        self.image = None;
                        self.pending_read = Some(pending);
                    }
                    Err(e) => {
                        log::warn!("Rejected upload {}: {}", file.name(), e);
                        self.error = Some(e.to_string());
                    }
                }
                true
            }
            DesignLabMsg::FileLoaded(epoch, result) => {
                if epoch != self.epoch {
                    return false;
                }
                self.pending_read = None;
                match result {
                    Ok(image) => self.image = Some(image),
                    Err(e) => self.error = Some(e.to_string()),
                }
                true
            }
            DesignLabMsg::Dragging(dragging) => {
                let changed = self.dragging != dragging;
                self.dragging = dragging;
                changed
            }
            DesignLabMsg::DismissError => {
                self.error = None;
                true
            }
            DesignLabMsg::RecheckCredential => {
                Self::check_credential(ctx);
                false
            }
            DesignLabMsg::CredentialChecked(result) => {
                match result {
                    Ok(configured) => {
                        self.credential_ok = configured;
                        if configured {
                            self.error = None;
                        }
                    }
                    Err(e) => log::warn!("Could not check AI status: {}", e),
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="design-lab-page">
                <section class="page-hero">
                    <span class="hero-badge">{"Beta Feature"}</span>
                    <h1>{"Banner Design Lab"}</h1>
                    <p>{"Experimentieren Sie mit neuen Banner-Designs via KI oder laden Sie Ihre Designs hoch, um sie im Kontext zu prüfen und bearbeiten zu lassen."}</p>
                </section>

                <section class="lab-grid">
                    <div class="lab-controls">
                        { self.view_mode_tabs(ctx) }
                        if let Some(error) = &self.error {
                            <div class="lab-error" role="alert">
                                <span>{"⚠️ "}{error}</span>
                                <button onclick={ctx.link().callback(|_| DesignLabMsg::DismissError)} aria-label="Schließen">
                                    {"✕"}
                                </button>
                            </div>
                        }
                        { self.view_controls(ctx) }
                    </div>
                    { self.view_preview() }
                </section>

                <section class="lab-examples">
                    <h2>{"Inspiration"}</h2>
                    <div class="example-grid">
                        { for DESIGN_EXAMPLES.iter().map(|example| {
                            let prompt = example.prompt;
                            html! {
                                <button
                                    class="example-card"
                                    onclick={ctx.link().callback(move |_| DesignLabMsg::UseExample(prompt))}
                                >
                                    <img src={example.image} alt={example.label} loading="lazy" />
                                    <span>{example.label}</span>
                                </button>
                            }
                        }) }
                    </div>
                </section>

                <style>
                    {r#"
                    .lab-grid {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 2rem;
                        display: grid;
                        grid-template-columns: 5fr 7fr;
                        gap: 2rem;
                    }
                    .lab-controls {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        padding: 1.5rem;
                        border: 1px solid #e5e5e5;
                        border-radius: 16px;
                        background: #fff;
                    }
                    .lab-tabs {
                        display: flex;
                        gap: 0.25rem;
                        padding: 0.25rem;
                        border-radius: 10px;
                        background: #f5f5f5;
                    }
                    .lab-tab {
                        flex: 1;
                        padding: 0.5rem;
                        border: none;
                        border-radius: 8px;
                        background: none;
                        font-weight: 700;
                        color: #737373;
                        cursor: pointer;
                    }
                    .lab-tab.active {
                        background: #fff;
                        color: #6A0DAD;
                        box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
                    }
                    .lab-prompt textarea {
                        width: 100%;
                        min-height: 120px;
                        padding: 0.8rem;
                        border: 1px solid #d4d4d4;
                        border-radius: 8px;
                    }
                    .ghost-button {
                        background: none;
                        border: none;
                        color: #6A0DAD;
                        font-size: 0.8rem;
                        cursor: pointer;
                    }
                    .primary-button.wide {
                        width: 100%;
                        padding: 1rem;
                    }
                    button:disabled {
                        opacity: 0.5;
                        cursor: default;
                    }
                    .upload-zone {
                        display: block;
                        padding: 2rem;
                        text-align: center;
                        border: 2px dashed #d4d4d4;
                        border-radius: 12px;
                        cursor: pointer;
                    }
                    .upload-zone.dragging {
                        border-color: #6A0DAD;
                        background: #f5ecfb;
                        transform: scale(1.02);
                    }
                    .size-picker {
                        display: flex;
                        gap: 0.5rem;
                        align-items: center;
                    }
                    .size-option {
                        padding: 0.4rem 0.8rem;
                        border: 1px solid #d4d4d4;
                        border-radius: 6px;
                        background: #fff;
                        cursor: pointer;
                    }
                    .size-option.active {
                        border-color: #6A0DAD;
                        color: #6A0DAD;
                    }
                    .lab-error {
                        display: flex;
                        justify-content: space-between;
                        gap: 0.5rem;
                        padding: 0.8rem;
                        border-radius: 8px;
                        background: #fef2f2;
                        color: #b91c1c;
                        font-size: 0.85rem;
                    }
                    .lab-error button {
                        background: none;
                        border: none;
                        color: inherit;
                        cursor: pointer;
                    }
                    .credential-gate {
                        padding: 1rem;
                        border-radius: 8px;
                        background: #fffbeb;
                        color: #92400e;
                    }
                    .lab-preview {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 1rem;
                        min-height: 420px;
                        border-radius: 16px;
                        background: #fafafa;
                    }
                    .lab-preview img {
                        max-width: 100%;
                        border-radius: 12px;
                    }
                    .lab-preview.empty {
                        color: #a3a3a3;
                        border: 1px dashed #e5e5e5;
                    }
                    .lab-examples {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 2rem 2rem 6rem;
                    }
                    .example-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                        gap: 1rem;
                    }
                    .example-card {
                        padding: 0;
                        border: 1px solid #e5e5e5;
                        border-radius: 12px;
                        overflow: hidden;
                        background: #fff;
                        cursor: pointer;
                        text-align: left;
                    }
                    .example-card img {
                        width: 100%;
                        height: 140px;
                        object-fit: cover;
                    }
                    .example-card span {
                        display: block;
                        padding: 0.6rem 0.8rem;
                        font-weight: 600;
                    }
                    @media (max-width: 900px) {
                        .lab-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                    "#}
                </style>
            </div>
        }
    }
}
