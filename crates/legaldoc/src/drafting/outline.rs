//! Editable outline of a free-form contract: ordered parts, each with ordered articles.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OutlineError {
    #[error("section {index} does not exist (outline has {len} sections)")]
    SectionOutOfRange { index: usize, len: usize },
    #[error("article {index} does not exist in section {section} ({len} articles)")]
    ArticleOutOfRange {
        section: usize,
        index: usize,
        len: usize,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlineSection {
    pub title: String,
    pub articles: Vec<String>,
}

/// Every mutation is all-or-nothing: an out-of-range index leaves the outline untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContractOutline {
    sections: Vec<OutlineSection>,
}

impl ContractOutline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sections(&self) -> &[OutlineSection] {
        &self.sections
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn article_count(&self) -> usize {
        self.sections
            .iter()
            .map(|section| section.articles.len())
            .sum()
    }

    /// Appends a part and returns its index.
    pub fn add_section(&mut self, title: impl Into<String>) -> usize {
        self.sections.push(OutlineSection {
            title: title.into(),
            articles: Vec::new(),
        });
        self.sections.len() - 1
    }

    pub fn remove_section(&mut self, index: usize) -> Result<OutlineSection, OutlineError> {
        self.check_section(index)?;
        Ok(self.sections.remove(index))
    }

    pub fn rename_section(
        &mut self,
        index: usize,
        title: impl Into<String>,
    ) -> Result<(), OutlineError> {
        self.section_mut(index)?.title = title.into();
        Ok(())
    }

    /// Appends an article to a part and returns its index within that part.
    pub fn add_article(
        &mut self,
        section_index: usize,
        text: impl Into<String>,
    ) -> Result<usize, OutlineError> {
        let section = self.section_mut(section_index)?;
        section.articles.push(text.into());
        Ok(section.articles.len() - 1)
    }

    pub fn remove_article(
        &mut self,
        section_index: usize,
        article_index: usize,
    ) -> Result<String, OutlineError> {
        let section = self.section_mut(section_index)?;
        let len = section.articles.len();
        if article_index >= len {
            return Err(OutlineError::ArticleOutOfRange {
                section: section_index,
                index: article_index,
                len,
            });
        }
        Ok(section.articles.remove(article_index))
    }

    fn check_section(&self, index: usize) -> Result<(), OutlineError> {
        if index >= self.sections.len() {
            return Err(OutlineError::SectionOutOfRange {
                index,
                len: self.sections.len(),
            });
        }
        Ok(())
    }

    fn section_mut(&mut self, index: usize) -> Result<&mut OutlineSection, OutlineError> {
        self.check_section(index)?;
        Ok(&mut self.sections[index])
    }
}

impl FromIterator<OutlineSection> for ContractOutline {
    fn from_iter<T: IntoIterator<Item = OutlineSection>>(iter: T) -> Self {
        Self {
            sections: iter.into_iter().collect(),
        }
    }
}
