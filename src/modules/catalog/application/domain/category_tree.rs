use std::collections::HashMap;

use uuid::Uuid;

use super::entities::{Category, CategoryNode};

/// Nests a flat category list under its roots (`parent_id = None`).
///
/// Children are grouped in one pass over a parent -> children map, then
/// attached depth-first from the roots. Siblings are ordered by name
/// (case-insensitive). Rows whose parent is not in the list never hang off a
/// root, so they are dropped together with their subtree.
pub fn build_category_tree(categories: Vec<Category>) -> Vec<CategoryNode> {
    let mut children: HashMap<Option<Uuid>, Vec<Category>> = HashMap::new();
    for category in categories {
        children.entry(category.parent_id).or_default().push(category);
    }

    attach(None, &mut children)
}

fn attach(
    parent: Option<Uuid>,
    children: &mut HashMap<Option<Uuid>, Vec<Category>>,
) -> Vec<CategoryNode> {
    let Some(mut level) = children.remove(&parent) else {
        return Vec::new();
    };

    level.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name))
    });

    level
        .into_iter()
        .map(|category| CategoryNode {
            children: attach(Some(category.id), children),
            id: category.id,
            name: category.name,
        })
        .collect()
}
