//! `app.js` generation: the standalone playback runtime.
//!
//! The script has no framework dependency and no globals. Everything lives
//! inside one IIFE, and all playback state is owned by a single
//! `PresentationPlayer` instance that follows the same rules as
//! [`crate::playback::PlaybackController`]. Only the options object is
//! generated; the rest of the script is fixed.

use serde::Serialize;
use slidekit_anim::{preset, preset_table, reduced_motion, AnimationConfig, PresetName};
use slidekit_core::Result;
use std::collections::BTreeMap;

use crate::options::{ExportOptions, OnAudioEnd};

const OPTIONS_PLACEHOLDER: &str = "__SLIDEKIT_OPTIONS__";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RuntimeOptions<'a> {
    storage_key: &'a str,
    on_audio_end: OnAudioEnd,
    presets: BTreeMap<&'static str, AnimationConfig>,
    reduced_motion: AnimationConfig,
}

const RUNTIME: &str = r#"(function () {
    'use strict';

    const OPTIONS = __SLIDEKIT_OPTIONS__;

    function easeCss(ease) {
        return 'cubic-bezier(' + ease.x1 + ', ' + ease.y1 + ', ' + ease.x2 + ', ' + ease.y2 + ')';
    }

    function applyMotion(el, state) {
        el.style.opacity = String(state.opacity);
        el.style.transform = 'translate(' + state.x + 'px, ' + state.y + 'px) scale(' + state.scale + ')';
    }

    // [startTime, startTime + duration) contains elapsed; first match wins
    function activeSegmentIndex(segments, elapsed) {
        for (let i = 0; i < segments.length; i++) {
            const segment = segments[i];
            if (elapsed >= segment.startTime && elapsed < segment.startTime + segment.duration) {
                return i;
            }
        }
        return -1;
    }

    function audioPath(slide) {
        return 'audio/slide-' + slide.id + '.mp3';
    }

    class ProgressStore {
        constructor(key) {
            this.key = key;
        }

        load(slideCount) {
            let raw = null;
            try {
                raw = window.localStorage.getItem(this.key);
            } catch (e) {
                return null;
            }
            if (raw === null) {
                return null;
            }
            try {
                const parsed = JSON.parse(raw);
                if (parsed && Number.isInteger(parsed.slideIndex) && parsed.slideIndex >= 0 && parsed.slideIndex < slideCount) {
                    return parsed;
                }
            } catch (e) {
                // malformed JSON is treated like an out-of-range index
            }
            console.warn('slidekit: ignoring stored progress', raw);
            return null;
        }

        save(slideIndex) {
            try {
                window.localStorage.setItem(this.key, JSON.stringify({ slideIndex: slideIndex, timestamp: Date.now() }));
            } catch (e) {
                console.warn('slidekit: could not save progress', e);
            }
        }
    }

    class PresentationPlayer {
        constructor(data, store) {
            this.slides = Array.isArray(data.slides) ? data.slides : [];
            this.store = store;
            this.slideIndex = 0;
            this.playing = false;
            this.audio = null;
            this.frame = null;
            this.startedAt = 0;
            this.elapsedBefore = 0;
            this.activeSegment = -1;
            this.reducedMotion = Boolean(window.matchMedia && window.matchMedia('(prefers-reduced-motion: reduce)').matches);
            this.el = {
                content: document.getElementById('slide-content'),
                playPause: document.getElementById('play-pause'),
                prev: document.getElementById('prev-slide'),
                next: document.getElementById('next-slide'),
                counter: document.getElementById('slide-counter'),
                progress: document.getElementById('progress'),
                progressBar: document.getElementById('progress-bar')
            };
        }

        start() {
            this.bind();
            if (this.slides.length === 0) {
                this.updateControls();
                return;
            }
            const stored = this.store.load(this.slides.length);
            this.loadSlide(stored ? stored.slideIndex : 0);
        }

        bind() {
            document.addEventListener('keydown', (event) => this.onKey(event));
            this.el.playPause.addEventListener('click', () => this.toggle());
            this.el.prev.addEventListener('click', () => this.previous());
            this.el.next.addEventListener('click', () => this.next());
            window.addEventListener('pagehide', () => this.teardown());
        }

        onKey(event) {
            if (event.code === 'Space' || event.key === ' ') {
                event.preventDefault();
                this.toggle();
            } else if (event.key === 'ArrowRight') {
                this.next();
            } else if (event.key === 'ArrowLeft') {
                this.previous();
            }
        }

        currentSlide() {
            return this.slides[this.slideIndex];
        }

        slideDuration(slide) {
            return slide.audio && slide.audio.duration > 0 ? slide.audio.duration : 0;
        }

        elapsed() {
            if (!this.playing) {
                return this.elapsedBefore;
            }
            return this.elapsedBefore + (performance.now() - this.startedAt) / 1000;
        }

        next() {
            if (this.slideIndex < this.slides.length - 1) {
                this.loadSlide(this.slideIndex + 1);
            }
        }

        previous() {
            if (this.slideIndex > 0) {
                this.loadSlide(this.slideIndex - 1);
            }
        }

        loadSlide(index) {
            if (index < 0 || index >= this.slides.length) {
                return;
            }
            this.stopLoop();
            this.stopAudio();
            this.slideIndex = index;
            this.elapsedBefore = 0;
            this.activeSegment = -1;
            const slide = this.currentSlide();
            this.render(slide);
            this.audio = this.createAudio(slide);
            this.store.save(index);
            this.applyTick(0);
            this.updateControls();
            if (this.playing) {
                this.resume();
            }
        }

        createAudio(slide) {
            if (!slide.audio || !slide.audio.src) {
                return null;
            }
            const audio = new Audio(audioPath(slide));
            audio.preload = 'auto';
            audio.addEventListener('ended', () => this.onAudioEnded());
            return audio;
        }

        stopAudio() {
            if (this.audio) {
                this.audio.pause();
                this.audio.removeAttribute('src');
                this.audio.load();
                this.audio = null;
            }
        }

        onAudioEnded() {
            if (OPTIONS.onAudioEnd === 'advance' && this.slideIndex < this.slides.length - 1) {
                this.loadSlide(this.slideIndex + 1);
            } else {
                this.pause();
            }
        }

        toggle() {
            if (this.playing) {
                this.pause();
            } else {
                this.play();
            }
        }

        play() {
            if (this.playing || this.slides.length === 0) {
                return;
            }
            this.playing = true;
            this.resume();
            this.updateControls();
        }

        resume() {
            this.startedAt = performance.now();
            if (this.audio) {
                const attempt = this.audio.play();
                if (attempt && typeof attempt.catch === 'function') {
                    attempt.catch((e) => console.warn('slidekit: audio playback blocked', e));
                }
            }
            this.frame = requestAnimationFrame(() => this.loop());
        }

        pause() {
            if (!this.playing) {
                return;
            }
            this.elapsedBefore = this.elapsed();
            this.playing = false;
            this.stopLoop();
            if (this.audio) {
                this.audio.pause();
            }
            this.updateControls();
        }

        stopLoop() {
            if (this.frame !== null) {
                cancelAnimationFrame(this.frame);
                this.frame = null;
            }
        }

        loop() {
            this.frame = null;
            if (!this.playing) {
                return;
            }
            this.applyTick(this.elapsed());
            this.frame = requestAnimationFrame(() => this.loop());
        }

        applyTick(elapsed) {
            const slide = this.currentSlide();
            const segments = Array.isArray(slide.layout) ? slide.layout : [];
            const index = activeSegmentIndex(segments, elapsed);
            if (index !== this.activeSegment) {
                this.activeSegment = index;
                this.applySegment(index >= 0 ? segments[index] : null);
            }
            const duration = this.slideDuration(slide);
            const fraction = duration > 0 ? Math.min(Math.max(elapsed / duration, 0), 1) : 0;
            this.el.progressBar.style.width = (fraction * 100).toFixed(2) + '%';
            this.el.progress.setAttribute('aria-valuenow', String(Math.round(fraction * 100)));
        }

        applySegment(segment) {
            this.el.content.className = 'slide layout-' + (segment ? segment.layout : 'default');
            if (segment && segment.animation) {
                this.animateSidebar(segment.animation);
            }
        }

        presetFor(name) {
            if (this.reducedMotion) {
                return OPTIONS.reducedMotion;
            }
            return OPTIONS.presets[name] || OPTIONS.presets.none;
        }

        animateSidebar(name) {
            const preset = this.presetFor(name);
            const ease = easeCss(preset.ease);
            const transition = 'opacity ' + preset.duration + 's ' + ease + ', transform ' + preset.duration + 's ' + ease;
            const items = this.el.content.querySelectorAll('.sidebar-item');
            items.forEach((item, i) => {
                item.style.transition = 'none';
                applyMotion(item, preset.item.hidden);
                // commit the hidden state before transitioning out of it
                void item.offsetWidth;
                item.style.transition = transition;
                item.style.transitionDelay = (preset.container.delay + preset.item.delay + preset.stagger * i) + 's';
                applyMotion(item, preset.item.visible);
            });
        }

        render(slide) {
            const content = slide.content || {};
            const root = this.el.content;
            root.textContent = '';

            const main = document.createElement('section');
            main.className = 'slide-main glass floating';
            const heading = document.createElement('h1');
            heading.textContent = content.title || '';
            main.appendChild(heading);
            root.appendChild(main);

            const sidebar = document.createElement('aside');
            sidebar.className = 'sidebar';
            sidebar.appendChild(this.renderSection('Vocabulary', content.vocabulary, (item) => [item.term, item.definition]));
            sidebar.appendChild(this.renderSection('Concepts', content.concepts, (item) => [item.title, item.description]));
            root.appendChild(sidebar);
        }

        renderSection(label, section, fields) {
            const wrapper = document.createElement('section');
            wrapper.className = 'sidebar-section glass';
            const heading = document.createElement('h2');
            heading.textContent = label;
            wrapper.appendChild(heading);

            const items = section && Array.isArray(section.items) ? section.items : [];
            const limit = section && section.maxItems > 0 ? section.maxItems : items.length;
            const list = document.createElement('ul');
            list.style.setProperty('--font-scale', String(section && section.fontSize > 0 ? section.fontSize : 1));
            items.slice(0, limit).forEach((item) => {
                const [primary, secondary] = fields(item);
                const li = document.createElement('li');
                li.className = 'sidebar-item' + (item.style && item.style.emphasis ? ' emphasis' : '');
                li.dataset.id = item.id;
                if (item.style && item.style.color) {
                    li.style.color = item.style.color;
                }
                const strong = document.createElement('strong');
                strong.textContent = primary || '';
                const span = document.createElement('span');
                span.textContent = secondary || '';
                li.appendChild(strong);
                li.appendChild(span);
                list.appendChild(li);
            });
            wrapper.appendChild(list);
            wrapper.hidden = items.length === 0;
            return wrapper;
        }

        updateControls() {
            const count = this.slides.length;
            this.el.prev.disabled = this.slideIndex <= 0;
            this.el.next.disabled = this.slideIndex >= count - 1;
            this.el.playPause.textContent = this.playing ? '❚❚' : '▶';
            this.el.playPause.setAttribute('aria-label', this.playing ? 'Pause' : 'Play');
            this.el.counter.textContent = (count === 0 ? 0 : this.slideIndex + 1) + ' / ' + count;
        }

        teardown() {
            this.stopLoop();
            this.stopAudio();
        }
    }

    function boot() {
        const dataElement = document.getElementById('presentation-data');
        const data = JSON.parse(dataElement.textContent);
        const player = new PresentationPlayer(data, new ProgressStore(OPTIONS.storageKey));
        player.start();
    }

    if (document.readyState === 'loading') {
        document.addEventListener('DOMContentLoaded', boot);
    } else {
        boot();
    }
})();
"#;

/// Build the runtime script for `options`.
pub fn generate_runtime(options: &ExportOptions) -> Result<String> {
    let runtime_options = RuntimeOptions {
        storage_key: &options.storage_key,
        on_audio_end: options.on_audio_end,
        presets: preset_table(),
        reduced_motion: reduced_motion(&preset(PresetName::FadeIn)),
    };
    let json = serde_json::to_string(&runtime_options)?;
    Ok(RUNTIME.replace(OPTIONS_PLACEHOLDER, &json))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::minify::minify_js;
    use crate::playback::{MemoryProgressStore, PlaybackController};
    use boa_engine::{Context, Source};
    use slidekit_core::{LayoutSegment, PresentationConfig, Slide};

    fn options_json(script: &str) -> serde_json::Value {
        let start = script.find("const OPTIONS = ").unwrap() + "const OPTIONS = ".len();
        let end = start + script[start..].find(";\n").unwrap();
        serde_json::from_str(&script[start..end]).unwrap()
    }

    /// Just enough of a browser for the player to boot: elements, storage,
    /// `Audio`, and a frame clock advanced by hand.
    const PAGE_STUBS: &str = r#"
var __now = 0;
var __frames = [];
var __frameId = 0;
var __audios = [];
var __warnings = [];
var __storage = {};
var __storageThrows = false;

function makeElement(tag) {
    var el = {
        tagName: tag,
        children: [],
        text: '',
        className: '',
        hidden: false,
        disabled: false,
        dataset: {},
        attributes: {},
        listeners: {},
        style: { setProperty: function (name, value) { this[name] = value; } },
        appendChild: function (child) { this.children.push(child); return child; },
        setAttribute: function (name, value) { this.attributes[name] = value; },
        addEventListener: function (type, fn) { this.listeners[type] = fn; },
        querySelectorAll: function (selector) {
            var cls = selector.slice(1);
            var found = [];
            var walk = function (node) {
                node.children.forEach(function (child) {
                    if ((' ' + child.className + ' ').indexOf(' ' + cls + ' ') >= 0) {
                        found.push(child);
                    }
                    walk(child);
                });
            };
            walk(this);
            return found;
        }
    };
    Object.defineProperty(el, 'textContent', {
        get: function () { return this.text; },
        set: function (value) { this.text = String(value); this.children = []; }
    });
    return el;
}

var __elements = {};
['slide-content', 'play-pause', 'prev-slide', 'next-slide', 'slide-counter', 'progress',
    'progress-bar', 'presentation-data'].forEach(function (id) {
    __elements[id] = makeElement('div');
});

var document = {
    readyState: 'complete',
    listeners: {},
    getElementById: function (id) { return __elements[id] || null; },
    createElement: makeElement,
    addEventListener: function (type, fn) { this.listeners[type] = fn; }
};

var window = globalThis;
var __windowListeners = {};
window.addEventListener = function (type, fn) { __windowListeners[type] = fn; };
window.matchMedia = function () { return { matches: false }; };

var localStorage = {
    getItem: function (key) {
        if (__storageThrows) { throw new Error('storage disabled'); }
        return Object.prototype.hasOwnProperty.call(__storage, key) ? __storage[key] : null;
    },
    setItem: function (key, value) {
        if (__storageThrows) { throw new Error('storage disabled'); }
        __storage[key] = String(value);
    }
};

var console = {
    log: function () {},
    warn: function () { __warnings.push(Array.prototype.slice.call(arguments).join(' ')); }
};

var performance = { now: function () { return __now; } };

function requestAnimationFrame(fn) {
    __frameId += 1;
    __frames.push({ id: __frameId, fn: fn });
    return __frameId;
}

function cancelAnimationFrame(id) {
    __frames = __frames.filter(function (f) { return f.id !== id; });
}

function __advance(ms) {
    __now += ms;
    var due = __frames;
    __frames = [];
    due.forEach(function (f) { f.fn(); });
}

function Audio(src) {
    this.src = src;
    this.listeners = {};
    this.playing = false;
    this.released = false;
    __audios.push(this);
}
Audio.prototype.play = function () { this.playing = true; };
Audio.prototype.pause = function () { this.playing = false; };
Audio.prototype.removeAttribute = function () { this.released = true; };
Audio.prototype.load = function () {};
Audio.prototype.addEventListener = function (type, fn) { this.listeners[type] = fn; };

function __key(key) {
    document.listeners.keydown({
        key: key,
        code: key === ' ' ? 'Space' : key,
        preventDefault: function () {}
    });
}

function __lastAudio() {
    return __audios[__audios.length - 1];
}
"#;

    /// The generated `app.js` booted in a JS engine against [`PAGE_STUBS`].
    struct Page {
        context: Context,
    }

    impl Page {
        fn open(
            config: &PresentationConfig,
            options: &ExportOptions,
            stored: Option<&str>,
        ) -> Self {
            let setup = match stored {
                Some(raw) => format!(
                    "__storage[{}] = {};",
                    serde_json::to_string(&options.storage_key).unwrap(),
                    serde_json::to_string(raw).unwrap()
                ),
                None => String::new(),
            };
            Self::boot(config, &setup, &generate_runtime(options).unwrap())
        }

        /// Load the stubs and `config`, run `setup`, then run `script`.
        fn boot(config: &PresentationConfig, setup: &str, script: &str) -> Self {
            let mut context = Context::default();
            let data = serde_json::to_string(config).unwrap();
            let page = format!(
                "{}\n__elements['presentation-data'].textContent = {};\n{}\n",
                PAGE_STUBS,
                serde_json::to_string(&data).unwrap(),
                setup
            );
            context.eval(Source::from_bytes(&page)).unwrap();
            context.eval(Source::from_bytes(script)).unwrap();
            Self { context }
        }

        fn eval(&mut self, code: &str) -> String {
            let value = self.context.eval(Source::from_bytes(code)).unwrap();
            value.to_string(&mut self.context).unwrap().to_std_string_escaped()
        }

        fn counter(&mut self) -> String {
            self.eval("__elements['slide-counter'].textContent")
        }

        fn layout_class(&mut self) -> String {
            self.eval("__elements['slide-content'].className")
        }

        fn play_label(&mut self) -> String {
            self.eval("__elements['play-pause'].attributes['aria-label']")
        }

        fn key(&mut self, key: &str) {
            self.eval(&format!("__key({})", serde_json::to_string(key).unwrap()));
        }

        fn advance_ms(&mut self, ms: u32) {
            self.eval(&format!("__advance({})", ms));
        }

        fn stored_index(&mut self, key: &str) -> String {
            let key = serde_json::to_string(key).unwrap();
            self.eval(&format!("JSON.parse(__storage[{}]).slideIndex", key))
        }
    }

    fn deck() -> PresentationConfig {
        let mut config = PresentationConfig::new("Runtime");
        config.push_slide(
            Slide::new(1)
                .with_audio("one.mp3", 9.0)
                .with_segment(LayoutSegment::new(0.0, 3.0, "focus"))
                .with_segment(
                    LayoutSegment::new(3.0, 3.0, "split").with_animation(PresetName::Stagger),
                )
                .with_segment(LayoutSegment::new(6.0, 3.0, "sidebar")),
        );
        config.push_slide(Slide::new(2).with_audio("two.mp3", 4.0));
        config.push_slide(Slide::new(3).with_audio("three.mp3", 4.0));
        config
    }

    #[test]
    fn test_options_are_embedded() {
        let opts = ExportOptions {
            storage_key: "lesson-7".into(),
            on_audio_end: OnAudioEnd::Stop,
            ..Default::default()
        };
        let script = generate_runtime(&opts).unwrap();
        assert!(!script.contains(OPTIONS_PLACEHOLDER));

        let embedded = options_json(&script);
        assert_eq!(embedded["storageKey"], "lesson-7");
        assert_eq!(embedded["onAudioEnd"], "stop");
        assert_eq!(embedded["presets"]["slideUp"]["item"]["hidden"]["y"], 20.0);
        assert_eq!(embedded["reducedMotion"]["stagger"], 0.0);
    }

    #[test]
    fn test_boot_renders_first_slide() {
        let options = ExportOptions::default();
        let mut page = Page::open(&deck(), &options, None);
        assert_eq!(page.counter(), "1 / 3");
        assert_eq!(page.layout_class(), "slide layout-focus");
        assert_eq!(page.play_label(), "Play");
        assert_eq!(page.eval("__lastAudio().src"), "audio/slide-1.mp3");
        assert_eq!(page.stored_index(&options.storage_key), "0");
        assert_eq!(page.eval("__elements['prev-slide'].disabled"), "true");
    }

    #[test]
    fn test_segment_boundaries_while_playing() {
        let mut page = Page::open(&deck(), &ExportOptions::default(), None);
        page.key(" ");
        assert_eq!(page.play_label(), "Pause");
        assert_eq!(page.eval("__lastAudio().playing"), "true");

        page.advance_ms(2999);
        assert_eq!(page.layout_class(), "slide layout-focus");
        // the end of one segment is the start of the next
        page.advance_ms(1);
        assert_eq!(page.layout_class(), "slide layout-split");
        page.advance_ms(3000);
        assert_eq!(page.layout_class(), "slide layout-sidebar");
        page.advance_ms(3000);
        assert_eq!(page.layout_class(), "slide layout-default");
        assert_eq!(page.eval("__elements['progress-bar'].style.width"), "100.00%");
    }

    #[test]
    fn test_paused_clock_does_not_move() {
        let mut page = Page::open(&deck(), &ExportOptions::default(), None);
        page.key(" ");
        page.advance_ms(1000);
        page.key(" ");
        assert_eq!(page.play_label(), "Play");
        assert_eq!(page.eval("__frames.length"), "0");

        page.advance_ms(5000);
        page.key(" ");
        page.advance_ms(1999);
        assert_eq!(page.layout_class(), "slide layout-focus");
        page.advance_ms(1);
        assert_eq!(page.layout_class(), "slide layout-split");
    }

    #[test]
    fn test_keyboard_navigation_is_bounded() {
        let options = ExportOptions::default();
        let mut page = Page::open(&deck(), &options, None);
        page.key("ArrowLeft");
        assert_eq!(page.counter(), "1 / 3");

        for _ in 0..4 {
            page.key("ArrowRight");
        }
        assert_eq!(page.counter(), "3 / 3");
        assert_eq!(page.stored_index(&options.storage_key), "2");
        assert_eq!(page.eval("__elements['next-slide'].disabled"), "true");

        page.key("ArrowLeft");
        assert_eq!(page.counter(), "2 / 3");
        // every superseded audio element was released
        assert_eq!(page.eval("__audios.filter(function (a) { return !a.released; }).length"), "1");
    }

    #[test]
    fn test_stored_progress_validation() {
        let cases = [
            (r#"{"slideIndex":2,"timestamp":5}"#, "3 / 3"),
            (r#"{"slideIndex":1}"#, "2 / 3"),
            (r#"{"slideIndex":3}"#, "1 / 3"),
            (r#"{"slideIndex":-1}"#, "1 / 3"),
            (r#"{"slideIndex":1.5}"#, "1 / 3"),
            ("{not json", "1 / 3"),
        ];
        for (raw, expected) in cases {
            let mut page = Page::open(&deck(), &ExportOptions::default(), Some(raw));
            assert_eq!(page.counter(), expected, "stored value {raw}");
        }

        let mut page = Page::open(&deck(), &ExportOptions::default(), Some("{not json"));
        assert_eq!(page.eval("__warnings.length"), "1");
    }

    #[test]
    fn test_stored_progress_matches_model() {
        let options = ExportOptions::default();
        for raw in [
            r#"{"slideIndex":1}"#,
            r#"{"slideIndex":2,"timestamp":"later"}"#,
            r#"{"slideIndex":7}"#,
            r#"{"slideIndex":0.5}"#,
            "[]",
        ] {
            let mut page = Page::open(&deck(), &options, Some(raw));
            let store = MemoryProgressStore::new().with_entry(options.storage_key.clone(), raw);
            let mut model = PlaybackController::new(deck(), &options, store);
            model.start();
            assert_eq!(page.counter(), model.counter(), "stored value {raw}");
        }
    }

    #[test]
    fn test_unavailable_storage_starts_at_first_slide() {
        let script = generate_runtime(&ExportOptions::default()).unwrap();
        let mut page = Page::boot(&deck(), "__storageThrows = true;", &script);
        assert_eq!(page.counter(), "1 / 3");
        page.key("ArrowRight");
        assert_eq!(page.counter(), "2 / 3");
    }

    #[test]
    fn test_empty_presentation_boots() {
        let empty = PresentationConfig::new("Empty");
        let mut page = Page::open(&empty, &ExportOptions::default(), None);
        assert_eq!(page.counter(), "0 / 0");
        page.key(" ");
        assert_eq!(page.play_label(), "Play");
    }

    #[test]
    fn test_audio_end_advances_then_pauses() {
        let mut page = Page::open(&deck(), &ExportOptions::default(), None);
        page.key(" ");
        page.eval("__lastAudio().listeners.ended()");
        assert_eq!(page.counter(), "2 / 3");
        assert_eq!(page.eval("__lastAudio().src"), "audio/slide-2.mp3");
        assert_eq!(page.eval("__lastAudio().playing"), "true");

        page.key("ArrowRight");
        page.eval("__lastAudio().listeners.ended()");
        assert_eq!(page.counter(), "3 / 3");
        assert_eq!(page.play_label(), "Play");
        assert_eq!(page.eval("__lastAudio().playing"), "false");
    }

    #[test]
    fn test_audio_end_stop_policy() {
        let options = ExportOptions {
            on_audio_end: OnAudioEnd::Stop,
            ..Default::default()
        };
        let mut page = Page::open(&deck(), &options, None);
        page.key(" ");
        page.eval("__lastAudio().listeners.ended()");
        assert_eq!(page.counter(), "1 / 3");
        assert_eq!(page.play_label(), "Play");
    }

    #[test]
    fn test_slide_text_is_not_parsed_as_markup() {
        let mut config = PresentationConfig::new("Escapes");
        config.push_slide(Slide::new(1).with_content(slidekit_core::SlideContent {
            title: "<img src=x onerror=alert(1)>".into(),
            ..Default::default()
        }));
        let mut page = Page::open(&config, &ExportOptions::default(), None);
        let heading = page.eval("__elements['slide-content'].children[0].children[0].textContent");
        assert_eq!(heading, "<img src=x onerror=alert(1)>");
    }

    #[test]
    fn test_runtime_declares_no_globals() {
        let script = generate_runtime(&ExportOptions::default()).unwrap();
        assert!(script.starts_with("(function () {"));
        assert!(script.trim_end().ends_with("})();"));

        let mut page = Page::open(&deck(), &ExportOptions::default(), None);
        assert_eq!(page.eval("typeof PresentationPlayer"), "undefined");
        assert_eq!(page.eval("typeof ProgressStore"), "undefined");
        assert_eq!(page.eval("typeof activeSegmentIndex"), "undefined");
    }

    #[test]
    fn test_minified_runtime_keeps_statements() {
        let script = generate_runtime(&ExportOptions::default()).unwrap();
        let minified = minify_js(&script);
        assert!(minified.len() < script.len());
        assert!(!minified.lines().any(|l| l.starts_with("//")));
        assert_eq!(options_json(&minified), options_json(&script));

        let mut page = Page::boot(&deck(), "", &minified);
        page.key("ArrowRight");
        assert_eq!(page.counter(), "2 / 3");
    }
}
