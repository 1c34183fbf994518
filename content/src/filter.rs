//! Search and category filtering for the travel stories list.

use std::fmt;

use crate::model::Post;

/// Category selector value. `All` disables category filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Category {
    #[default]
    All,
    Named(String),
}

impl Category {
    /// Label used by the selector; "All" maps back to [`Category::All`].
    pub fn parse(label: &str) -> Self {
        if label == "All" {
            Category::All
        } else {
            Category::Named(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Category::All => "All",
            Category::Named(name) => name,
        }
    }

    fn admits(&self, post: &Post) -> bool {
        match self {
            Category::All => true,
            Category::Named(name) => post.category == name.as_str(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The two user inputs driving the stories list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoryFilter {
    pub query: String,
    pub category: Category,
}

impl StoryFilter {
    pub fn is_active(&self) -> bool {
        !self.query.is_empty() || self.category != Category::All
    }

    pub fn matches(&self, post: &Post) -> bool {
        self.category.admits(post) && matches_query(post, &self.query)
    }

    /// Posts passing the filter, in list order.
    pub fn apply<'a>(&self, posts: &'a [Post]) -> Vec<&'a Post> {
        posts.iter().filter(|post| self.matches(post)).collect()
    }
}

/// Case-insensitive substring match against title, location and tags.
/// Other fields (excerpt, body) are not searched.
fn matches_query(post: &Post, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    let hit = |field: &str| field.to_lowercase().contains(&needle);

    hit(post.title)
        || hit(post.location)
        || post.tags.iter().any(|tag| hit(*tag))
}

pub fn filter_posts<'a>(
    posts: &'a [Post],
    query: &str,
    category: &Category,
) -> Vec<&'a Post> {
    posts
        .iter()
        .filter(|post| category.admits(post) && matches_query(post, query))
        .collect()
}

/// `All` followed by each distinct category in order of first appearance.
pub fn categories(posts: &[Post]) -> Vec<Category> {
    let mut out = vec![Category::All];
    for post in posts {
        let category = Category::Named(post.category.to_string());
        if !out.contains(&category) {
            out.push(category);
        }
    }
    out
}
