//! Mock DOM surface
//!
//! An in-memory stand-in for the browser page: a display element plus one
//! button per keypad control. Lets the router be exercised without a real
//! display.

use std::collections::HashMap;

use crate::core::{DisplayStyle, Operator, StyleSpec};
use crate::router::{DisplaySurface, InputEvent, InputSurface};

/// Class toggled on the highlighted operator button
pub const ACTIVE_OPERATOR_CLASS: &str = "active-operator";

/// Class carried by the display while it shows an error
pub const ERROR_DISPLAY_CLASS: &str = "display-error";

/// ID of the display element
pub const DISPLAY_ID: &str = "display";

/// A DOM element with the parts the calculator touches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomElement {
    /// Element ID
    pub id: String,
    /// Element tag name
    pub tag: String,
    /// Text content
    pub text_content: String,
    /// Inline style properties
    pub style: HashMap<String, String>,
    /// CSS classes
    pub classes: Vec<String>,
}

impl DomElement {
    /// Creates an element with the given tag
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_string(),
            text_content: String::new(),
            style: HashMap::new(),
            classes: Vec::new(),
        }
    }

    /// Sets the ID
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Sets the text content
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    /// Adds a class
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    /// Adds a class once
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Removes a class
    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Checks for a class
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Gets an inline style property
    #[must_use]
    pub fn style_property(&self, key: &str) -> Option<&str> {
        self.style.get(key).map(String::as_str)
    }
}

/// Element ID of the button that emits `event`
#[must_use]
pub fn button_id(event: InputEvent) -> String {
    match event {
        InputEvent::Digit(d) => format!("btn-{d}"),
        InputEvent::Decimal => "btn-decimal".to_string(),
        InputEvent::Sign => "btn-sign".to_string(),
        InputEvent::Percent => "btn-percent".to_string(),
        InputEvent::Operator(op) => format!("btn-{}", op.name()),
        InputEvent::Equal => "btn-equal".to_string(),
        InputEvent::Clear => "btn-clear".to_string(),
    }
}

/// Every keypad control, in layout order
#[must_use]
pub fn keypad_events() -> Vec<InputEvent> {
    let mut events = vec![InputEvent::Clear, InputEvent::Sign, InputEvent::Percent];
    events.extend(Operator::ALL.iter().map(|op| InputEvent::Operator(*op)));
    events.extend((0..=9).map(InputEvent::Digit));
    events.extend([InputEvent::Decimal, InputEvent::Equal]);
    events
}

/// Mock page holding the calculator's elements
#[derive(Debug)]
pub struct MockDom {
    elements: HashMap<String, DomElement>,
    /// Number of surface updates received
    mutations: usize,
}

impl Default for MockDom {
    fn default() -> Self {
        Self::calculator()
    }
}

impl MockDom {
    /// Creates the calculator page: display plus keypad buttons
    #[must_use]
    pub fn calculator() -> Self {
        let mut dom = Self {
            elements: HashMap::new(),
            mutations: 0,
        };
        dom.register(
            DomElement::new("div")
                .with_id(DISPLAY_ID)
                .with_class("display")
                .with_text("0"),
        );
        for event in keypad_events() {
            let class = match event {
                InputEvent::Digit(_) => "operand",
                InputEvent::Operator(_) => "operator",
                _ => "control",
            };
            dom.register(
                DomElement::new("button")
                    .with_id(&button_id(event))
                    .with_class(class)
                    .with_text(&event.label()),
            );
        }
        dom
    }

    /// Registers an element for ID lookup
    pub fn register(&mut self, element: DomElement) {
        if !element.id.is_empty() {
            self.elements.insert(element.id.clone(), element);
        }
    }

    /// Gets an element by ID
    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&DomElement> {
        self.elements.get(id)
    }

    /// Returns the display element
    #[must_use]
    pub fn display(&self) -> Option<&DomElement> {
        self.get_element(DISPLAY_ID)
    }

    /// Returns the display text
    #[must_use]
    pub fn display_text(&self) -> &str {
        self.display().map_or("", |e| e.text_content.as_str())
    }

    /// Returns the display preset, read back from the display's classes
    #[must_use]
    pub fn display_style(&self) -> DisplayStyle {
        if self
            .display()
            .is_some_and(|e| e.has_class(ERROR_DISPLAY_CLASS))
        {
            DisplayStyle::Error
        } else {
            DisplayStyle::Normal
        }
    }

    /// Returns the label of the button whose ID is `id`
    #[must_use]
    pub fn button_label(&self, id: &str) -> Option<&str> {
        self.get_element(id)
            .filter(|e| e.tag == "button")
            .map(|e| e.text_content.as_str())
    }

    /// Returns the operators currently carrying the highlight class
    #[must_use]
    pub fn active_operators(&self) -> Vec<Operator> {
        Operator::ALL
            .into_iter()
            .filter(|op| {
                self.get_element(&button_id(InputEvent::Operator(*op)))
                    .is_some_and(|e| e.has_class(ACTIVE_OPERATOR_CLASS))
            })
            .collect()
    }

    /// Returns how many updates the page has received
    #[must_use]
    pub fn mutations(&self) -> usize {
        self.mutations
    }
}

impl DisplaySurface for MockDom {
    fn set_text(&mut self, text: &str) {
        if let Some(display) = self.elements.get_mut(DISPLAY_ID) {
            display.text_content = text.to_string();
            self.mutations += 1;
        }
    }

    fn set_style(&mut self, style: DisplayStyle, spec: &StyleSpec) {
        if let Some(display) = self.elements.get_mut(DISPLAY_ID) {
            match style {
                DisplayStyle::Error => display.add_class(ERROR_DISPLAY_CLASS),
                DisplayStyle::Normal => display.remove_class(ERROR_DISPLAY_CLASS),
            }
            display
                .style
                .insert("color".to_string(), spec.color.clone());
            display
                .style
                .insert("font-size".to_string(), spec.font_size.clone());
            self.mutations += 1;
        }
    }
}

impl InputSurface for MockDom {
    fn set_operator_active(&mut self, op: Option<Operator>) {
        for candidate in Operator::ALL {
            let id = button_id(InputEvent::Operator(candidate));
            if let Some(button) = self.elements.get_mut(&id) {
                if Some(candidate) == op {
                    button.add_class(ACTIVE_OPERATOR_CLASS);
                } else {
                    button.remove_class(ACTIVE_OPERATOR_CLASS);
                }
            }
        }
        self.mutations += 1;
    }
}
