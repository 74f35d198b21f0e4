//! `web-sys` implementation of [`GalleryView`] over the host gallery markup.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, EventTarget, HtmlAnchorElement, HtmlElement, HtmlImageElement, HtmlVideoElement, KeyboardEvent,
    MouseEvent,
};

use super::{js_error_text, with_gallery};
use crate::config::ElementIds;
use crate::consts::{DOWNLOAD_LABEL, IMAGE_ALT, MEDIA_ITEM_CLASS, UNSUPPORTED_CLASS, UNSUPPORTED_MESSAGE};
use crate::error::UiError;
use crate::gallery::{Gallery, GalleryView, MediaCursor};
use crate::media::{MediaKind, Slide};

type MouseClosure = Closure<dyn FnMut(MouseEvent)>;
type MouseHandler = fn(&mut Gallery<DomGalleryView>, &MouseEvent);

/// Gallery elements resolved once at init.
pub struct DomGalleryView {
    document: Document,
    root: HtmlElement,
    container: Element,
    counter: Element,
    prev_button: HtmlElement,
    next_button: HtmlElement,
    /// Currently rendered image or video; the transform target.
    media: Option<HtmlElement>,
    /// Image still waiting for `load`, with its handler.
    pending: Option<(HtmlImageElement, Closure<dyn FnMut()>)>,
    /// Mouse listeners on the loaded image; dropped on the next render.
    listeners: Rc<RefCell<Vec<MouseClosure>>>,
}

impl DomGalleryView {
    /// Look up every gallery element by id.
    pub fn bind(document: &Document, ids: &ElementIds) -> Result<Self, UiError> {
        Ok(Self {
            document: document.clone(),
            root: html_element(document, &ids.gallery)?,
            container: element(document, &ids.media_container)?,
            counter: element(document, &ids.counter)?,
            prev_button: html_element(document, &ids.prev_button)?,
            next_button: html_element(document, &ids.next_button)?,
            media: None,
            pending: None,
            listeners: Rc::new(RefCell::new(Vec::new())),
        })
    }

    #[must_use]
    pub fn root(&self) -> &HtmlElement {
        &self.root
    }

    fn render_image(&mut self, slide: &Slide) -> Result<(), UiError> {
        let img: HtmlImageElement = create(&self.document, "img")?;
        img.set_class_name(MEDIA_ITEM_CLASS);
        img.set_alt(IMAGE_ALT);

        let loaded = img.clone();
        let listeners = Rc::clone(&self.listeners);
        let on_load = Closure::wrap(Box::new(move || {
            wire_image(&loaded, &listeners);
            with_gallery(Gallery::media_loaded);
        }) as Box<dyn FnMut()>);
        img.set_onload(Some(on_load.as_ref().unchecked_ref()));
        img.set_src(&slide.url);

        self.container.append_child(&img)?;
        self.media = Some(img.clone().unchecked_into());
        self.pending = Some((img, on_load));
        Ok(())
    }

    fn render_video(&mut self, slide: &Slide) -> Result<(), UiError> {
        let video: HtmlVideoElement = create(&self.document, "video")?;
        video.set_src(&slide.url);
        video.set_controls(true);
        video.set_autoplay(true);
        video.set_class_name(&format!("{MEDIA_ITEM_CLASS} video"));
        self.container.append_child(&video)?;
        self.media = Some(video.unchecked_into());
        Ok(())
    }

    fn render_fallback(&mut self, slide: &Slide) -> Result<(), UiError> {
        let wrapper: HtmlElement = create(&self.document, "div")?;
        wrapper.set_class_name(UNSUPPORTED_CLASS);

        let message: HtmlElement = create(&self.document, "p")?;
        message.set_text_content(Some(UNSUPPORTED_MESSAGE));

        let link: HtmlAnchorElement = create(&self.document, "a")?;
        link.set_href(&slide.url);
        link.set_download(&slide.file_name);
        link.set_text_content(Some(DOWNLOAD_LABEL));

        wrapper.append_child(&message)?;
        wrapper.append_child(&link)?;
        self.container.append_child(&wrapper)?;
        Ok(())
    }
}

impl GalleryView for DomGalleryView {
    fn set_visible(&mut self, visible: bool) -> Result<(), UiError> {
        self.root.style().set_property("display", if visible { "flex" } else { "none" })?;
        Ok(())
    }

    fn is_visible(&self) -> bool {
        self.root.style().get_property_value("display").map_or(false, |display| display == "flex")
    }

    fn clear(&mut self) -> Result<(), UiError> {
        // Detach before dropping: a late `load` must not reach a freed closure.
        if let Some((img, _on_load)) = self.pending.take() {
            img.set_onload(None);
        }
        self.media = None;
        self.container.set_inner_html("");
        self.listeners.borrow_mut().clear();
        Ok(())
    }

    fn render(&mut self, slide: &Slide) -> Result<(), UiError> {
        match slide.kind {
            MediaKind::Image => self.render_image(slide),
            MediaKind::Video => self.render_video(slide),
            MediaKind::Unsupported => self.render_fallback(slide),
        }
    }

    fn set_counter(&mut self, text: &str) -> Result<(), UiError> {
        self.counter.set_text_content(Some(text));
        Ok(())
    }

    fn set_nav(&mut self, prev_visible: bool, next_visible: bool) -> Result<(), UiError> {
        set_display(&self.prev_button, prev_visible)?;
        set_display(&self.next_button, next_visible)
    }

    fn apply_transform(&mut self, transform: &str) -> Result<(), UiError> {
        if let Some(media) = &self.media {
            media.style().set_property("transform", transform)?;
        }
        Ok(())
    }

    fn set_media_cursor(&mut self, cursor: MediaCursor) -> Result<(), UiError> {
        if let Some(media) = &self.media {
            media.style().set_property("cursor", cursor.as_css())?;
        }
        Ok(())
    }
}

/// Escape closes the gallery; clicks on the backdrop itself close it too.
///
/// Installed once for the page lifetime.
pub fn install_page_listeners(document: &Document, root: &HtmlElement) -> Result<(), UiError> {
    let on_key = Closure::wrap(Box::new(|event: KeyboardEvent| {
        with_gallery(|g| g.key_down(&event.key()));
    }) as Box<dyn FnMut(KeyboardEvent)>);
    document.add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref())?;
    on_key.forget();

    let root_target: EventTarget = root.clone().unchecked_into();
    let on_click = Closure::wrap(Box::new(move |event: MouseEvent| {
        let on_root = event.target().is_some_and(|target| target == root_target);
        with_gallery(|g| g.background_click(on_root));
    }) as Box<dyn FnMut(MouseEvent)>);
    root.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();
    Ok(())
}

fn wire_image(img: &HtmlImageElement, listeners: &Rc<RefCell<Vec<MouseClosure>>>) {
    let handlers: [(&str, MouseHandler); 5] = [
        ("mousedown", |g, e| g.pointer_down(f64::from(e.client_x()), f64::from(e.client_y()))),
        ("mousemove", |g, e| g.pointer_move(f64::from(e.client_x()), f64::from(e.client_y()))),
        ("mouseup", |g, _| g.pointer_up()),
        ("mouseleave", |g, _| g.pointer_leave()),
        ("dblclick", |g, _| g.double_click()),
    ];
    let mut bound = listeners.borrow_mut();
    for (event, handler) in handlers {
        let closure = Closure::wrap(Box::new(move |e: MouseEvent| {
            with_gallery(|g| handler(g, &e));
        }) as Box<dyn FnMut(MouseEvent)>);
        if let Err(e) = img.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
            log::warn!("gallery {event} listener not attached: {}", js_error_text(&e));
        }
        bound.push(closure);
    }
}

fn set_display(el: &HtmlElement, visible: bool) -> Result<(), UiError> {
    el.style().set_property("display", if visible { "block" } else { "none" })?;
    Ok(())
}

fn element(document: &Document, id: &str) -> Result<Element, UiError> {
    document.get_element_by_id(id).ok_or_else(|| UiError::MissingElement(id.to_owned()))
}

fn html_element(document: &Document, id: &str) -> Result<HtmlElement, UiError> {
    element(document, id)?.dyn_into::<HtmlElement>().map_err(|_| UiError::Dom(format!("#{id} is not an html element")))
}

fn create<T: JsCast>(document: &Document, tag: &str) -> Result<T, UiError> {
    document.create_element(tag)?.dyn_into::<T>().map_err(|_| UiError::Dom(format!("<{tag}> has an unexpected type")))
}
