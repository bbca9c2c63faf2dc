//! # Contact Form
//!
//! Local, cosmetic validation only. Required fields must be non-blank and
//! the message must stay within the character limit. Nothing is sent
//! anywhere; an accepted submission just resets the form.

use log::{debug, info};

pub const DEFAULT_MESSAGE_LIMIT: usize = 1000;

pub const SUBMIT_CONFIRMATION: &str = "Thank you for your message! We will get back to you soon.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Name,
    Email,
    Subject,
    Message,
}

impl FieldId {
    pub const ALL: [FieldId; 4] = [FieldId::Name, FieldId::Email, FieldId::Subject, FieldId::Message];

    pub fn label(self) -> &'static str {
        match self {
            FieldId::Name => "Name",
            FieldId::Email => "Email",
            FieldId::Subject => "Subject",
            FieldId::Message => "Message",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Field {
    pub id: FieldId,
    pub value: String,
    pub required: bool,
    pub invalid: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted(String),
    Rejected(Vec<FieldId>),
}

#[derive(Debug, Clone)]
pub struct ContactForm {
    fields: Vec<Field>,
    message_limit: usize,
    counter_text: String,
    counter_danger: bool,
}

impl ContactForm {
    pub fn new(message_limit: usize) -> Self {
        let fields = FieldId::ALL
            .iter()
            .map(|&id| Field {
                id,
                value: String::new(),
                required: id != FieldId::Subject,
                invalid: false,
            })
            .collect();
        Self {
            fields,
            message_limit,
            counter_text: counter_text(0, message_limit),
            counter_danger: false,
        }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, id: FieldId) -> &Field {
        // Every FieldId is created in new().
        &self.fields[id as usize]
    }

    fn field_mut(&mut self, id: FieldId) -> &mut Field {
        &mut self.fields[id as usize]
    }

    pub fn message_limit(&self) -> usize {
        self.message_limit
    }

    pub fn counter_text(&self) -> &str {
        &self.counter_text
    }

    pub fn counter_danger(&self) -> bool {
        self.counter_danger
    }

    /// Replaces a field's value. Editing clears the invalid mark, except
    /// that an over-limit message is immediately marked invalid again.
    pub fn input(&mut self, id: FieldId, value: String) {
        let limit = self.message_limit;
        let field = self.field_mut(id);
        field.value = value;
        field.invalid = false;

        if id == FieldId::Message {
            let length = field.value.chars().count();
            let over = length > limit;
            field.invalid = over;
            self.counter_text = counter_text(length, limit);
            self.counter_danger = over;
        }
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        let limit = self.message_limit;
        let mut invalid = Vec::new();

        for field in &mut self.fields {
            let blank = field.value.trim().is_empty();
            let over_limit = field.id == FieldId::Message && field.value.chars().count() > limit;
            field.invalid = (field.required && blank) || over_limit;
            if field.invalid {
                invalid.push(field.id);
            }
        }

        if !invalid.is_empty() {
            debug!("Contact form rejected, invalid fields: {:?}", invalid);
            return SubmitOutcome::Rejected(invalid);
        }

        info!("Contact form accepted");
        self.reset();
        SubmitOutcome::Accepted(SUBMIT_CONFIRMATION.to_string())
    }

    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
            field.invalid = false;
        }
        self.counter_text = counter_text(0, self.message_limit);
        self.counter_danger = false;
    }
}

fn counter_text(length: usize, limit: usize) -> String {
    format!("{length}/{limit} characters")
}
