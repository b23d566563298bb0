use std::rc::Rc;

use gloo::file::{File, ObjectUrl};
use web_sys::HtmlInputElement;

/// A locally selected avatar image and the object URL used to preview it.
///
/// The URL is created once per selection and revoked when the last clone of
/// the avatar is dropped: when a new file replaces it, or when the shell
/// unmounts.
#[derive(Clone)]
pub struct Avatar {
    file: File,
    url: Rc<ObjectUrl>,
}

impl Avatar {
    pub fn new(file: File) -> Self {
        let url = Rc::new(ObjectUrl::from(file.clone()));
        Self { file, url }
    }

    /// First file chosen in a file input, if any
    pub fn from_input(input: &HtmlInputElement) -> Option<Self> {
        let selected = input.files()?.get(0)?;
        Some(Self::new(File::from(selected)))
    }

    pub fn file_name(&self) -> String {
        self.file.name()
    }

    pub fn size(&self) -> u64 {
        self.file.size()
    }

    /// Object URL suitable for an `<img src>`
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl PartialEq for Avatar {
    fn eq(&self, other: &Self) -> bool {
        self.url() == other.url()
    }
}
