//! Staging area for files picked or dropped by the user

use log::debug;

use super::types::StagedFile;

/// Pointer events over the drop surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEvent {
    Enter,
    Over,
    Leave,
}

/// Ordered, duplicate-tolerant list of files awaiting upload
#[derive(Debug, Clone, Default)]
pub struct FileStager {
    files: Vec<StagedFile>,
    drag_active: bool,
}

impl FileStager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append files in the given order. Returns how many were added.
    pub fn stage<I>(&mut self, files: I) -> usize
    where
        I: IntoIterator<Item = StagedFile>,
    {
        let before = self.files.len();
        self.files.extend(files);
        let added = self.files.len() - before;
        if added > 0 {
            debug!("Staged {} file(s), {} total", added, self.files.len());
        }
        added
    }

    /// Track the drag highlight; drops go through [`FileStager::drop_files`]
    pub fn handle_drag(&mut self, event: DragEvent) {
        self.drag_active = match event {
            DragEvent::Enter | DragEvent::Over => true,
            DragEvent::Leave => false,
        };
    }

    pub fn drag_enter(&mut self) {
        self.handle_drag(DragEvent::Enter);
    }

    pub fn drag_over(&mut self) {
        self.handle_drag(DragEvent::Over);
    }

    pub fn drag_leave(&mut self) {
        self.handle_drag(DragEvent::Leave);
    }

    /// End the drag and stage the dropped files in one step
    pub fn drop_files<I>(&mut self, files: I) -> usize
    where
        I: IntoIterator<Item = StagedFile>,
    {
        self.drag_active = false;
        self.stage(files)
    }

    pub fn is_drag_active(&self) -> bool {
        self.drag_active
    }

    /// Remove the entry at `index`; `None` and no change when out of range
    pub fn remove(&mut self, index: usize) -> Option<StagedFile> {
        if index < self.files.len() {
            Some(self.files.remove(index))
        } else {
            None
        }
    }

    pub fn files(&self) -> &[StagedFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }

    /// Take every staged file, leaving the stager empty
    pub fn take(&mut self) -> Vec<StagedFile> {
        std::mem::take(&mut self.files)
    }

    /// Sum of the staged sizes in bytes
    pub fn total_size(&self) -> u64 {
        self.files.iter().map(|f| f.size).sum()
    }

    /// Caption of the upload button, e.g. `Upload 2 files`
    pub fn upload_label(&self) -> String {
        let n = self.files.len();
        format!("Upload {} file{}", n, if n == 1 { "" } else { "s" })
    }
}
