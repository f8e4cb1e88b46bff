//! State of the modal used to create, rename, bind or delete a section.

use folio_core::{CoreError, LinkedEntity};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Operation a section modal is opened for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionOperation {
    CreateSection,
    BindEntityToSection,
    UpdateSection,
    DeleteSection,
}

impl SectionOperation {
    /// Heading shown at the top of the modal.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::CreateSection => "New document",
            Self::BindEntityToSection => "Bind knowledge point",
            Self::UpdateSection => "Rename document",
            Self::DeleteSection => "Delete document",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreateSection => "CreateSection",
            Self::BindEntityToSection => "BindEntityToSection",
            Self::UpdateSection => "UpdateSection",
            Self::DeleteSection => "DeleteSection",
        }
    }
}

impl fmt::Display for SectionOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One choice in the entity picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityOption {
    pub key: String,
    pub label: String,
    pub value: String,
}

impl From<&LinkedEntity> for EntityOption {
    fn from(entity: &LinkedEntity) -> Self {
        Self {
            key: entity.entity_id.clone(),
            label: entity.name.clone(),
            value: entity.entity_id.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionModalForm {
    pub section_name: String,
    pub selected_entity_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionModal {
    pub operation: SectionOperation,
    pub title: String,
    pub parent_section_id: Option<String>,
    pub parent_section_name: Option<String>,
    pub entity_options: Vec<EntityOption>,
    pub is_confirm_loading: bool,
    pub is_open: bool,
    pub form: SectionModalForm,
}

impl Default for SectionModal {
    fn default() -> Self {
        Self {
            operation: SectionOperation::CreateSection,
            title: SectionOperation::CreateSection.title().to_string(),
            parent_section_id: None,
            parent_section_name: None,
            entity_options: Vec::new(),
            is_confirm_loading: false,
            is_open: false,
            form: SectionModalForm::default(),
        }
    }
}

impl SectionModal {
    /// Open the modal for `operation`, optionally under a parent section.
    ///
    /// The form is cleared; entity options are kept.
    pub fn open(&mut self, operation: SectionOperation, parent: Option<(&str, &str)>) {
        self.operation = operation;
        self.title = operation.title().to_string();
        self.parent_section_id = parent.map(|(id, _)| id.to_string());
        self.parent_section_name = parent.map(|(_, name)| name.to_string());
        self.is_confirm_loading = false;
        self.form = SectionModalForm::default();
        self.is_open = true;
    }

    pub fn set_entity_options<'a>(&mut self, entities: impl IntoIterator<Item = &'a LinkedEntity>) {
        self.entity_options = entities.into_iter().map(EntityOption::from).collect();
    }

    /// Check the form has what the current operation needs.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] naming the missing field.
    pub fn validate(&self) -> Result<(), CoreError> {
        match self.operation {
            SectionOperation::CreateSection | SectionOperation::UpdateSection
                if self.form.section_name.trim().is_empty() =>
            {
                Err(CoreError::Validation("section name is required".into()))
            }
            SectionOperation::BindEntityToSection if self.form.selected_entity_id.is_empty() => {
                Err(CoreError::Validation("an entity must be selected".into()))
            }
            _ => Ok(()),
        }
    }

    /// Mark the confirm button busy. Returns `false` if a confirm is
    /// already in progress.
    pub fn begin_confirm(&mut self) -> bool {
        if self.is_confirm_loading {
            return false;
        }
        self.is_confirm_loading = true;
        true
    }

    /// End a confirm; a successful one closes the modal.
    pub fn finish_confirm(&mut self, succeeded: bool) {
        self.is_confirm_loading = false;
        if succeeded {
            self.close();
        }
    }

    pub fn close(&mut self) {
        self.is_open = false;
        self.is_confirm_loading = false;
        self.form = SectionModalForm::default();
    }
}
