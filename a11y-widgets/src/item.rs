//! Items, item paths and the declarative source widgets are built from.

use serde::Deserialize;

/// Stable identity of an item within one widget.
///
/// Keys are handed out depth-first at construction and never change, so an
/// item keeps its key when it is reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemKey(u32);

impl ItemKey {
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ItemKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Location of an item in a (possibly nested) collection: one sibling index
/// per level, outermost first. `[2]` is the third top-level item, `[2, 0]`
/// its first child.
pub type ItemPath = Vec<usize>;

/// Position metadata exposed to assistive technology.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Position {
    /// Nesting level, 1 for top-level items.
    pub level: usize,
    /// 1-based position among siblings.
    pub pos_in_set: usize,
    /// Number of siblings including the item itself.
    pub set_size: usize,
}

/// An entry in a widget's ordered collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    key: ItemKey,
    label: String,
    pub(crate) index: usize,
    pub(crate) position: Position,
    pub(crate) focusable: bool,
    pub(crate) selected: bool,
    pub(crate) expanded: bool,
    pub(crate) children: Vec<Item>,
}

impl Item {
    pub fn key(&self) -> ItemKey {
        self.key
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// 0-based index among siblings.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Whether this item is the widget's single keyboard focus stop.
    pub fn is_focusable(&self) -> bool {
        self.focusable
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Whether this item's children are shown. Always false for leaves.
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn is_expandable(&self) -> bool {
        self.has_children()
    }

    pub fn children(&self) -> &[Item] {
        &self.children
    }

    /// Build an item tree from its declarative source, allocating keys from
    /// `next_key`.
    pub(crate) fn from_source(source: &SourceItem, next_key: &mut u32) -> Self {
        let key = ItemKey(*next_key);
        *next_key += 1;
        let children = source
            .children
            .iter()
            .map(|child| Item::from_source(child, next_key))
            .collect();
        Self {
            key,
            label: source.label.clone(),
            index: 0,
            position: Position::default(),
            focusable: false,
            selected: source.selected,
            expanded: false,
            children,
        }
    }

    pub(crate) fn set_label(&mut self, label: String) {
        self.label = label;
    }
}

// -----------------------------------------------------------------------------
// Tree helpers
// -----------------------------------------------------------------------------

/// Get the item at `path`.
pub fn get<'a>(items: &'a [Item], path: &[usize]) -> Option<&'a Item> {
    let (first, rest) = path.split_first()?;
    let mut item = items.get(*first)?;
    for &i in rest {
        item = item.children.get(i)?;
    }
    Some(item)
}

/// Get the item at `path` mutably.
pub fn get_mut<'a>(items: &'a mut [Item], path: &[usize]) -> Option<&'a mut Item> {
    let (first, rest) = path.split_first()?;
    let mut item = items.get_mut(*first)?;
    for &i in rest {
        item = item.children.get_mut(i)?;
    }
    Some(item)
}

/// The sibling list containing the item at `path`.
pub fn siblings<'a>(items: &'a [Item], path: &[usize]) -> Option<&'a [Item]> {
    match path.split_last() {
        None => None,
        Some((_, [])) => Some(items),
        Some((_, parent)) => get(items, parent).map(|p| p.children.as_slice()),
    }
}

/// Whether every ancestor of `path` is expanded.
pub fn is_visible(items: &[Item], path: &[usize]) -> bool {
    if get(items, path).is_none() {
        return false;
    }
    (1..path.len()).all(|depth| get(items, &path[..depth]).is_some_and(|a| a.expanded))
}

/// Paths of all visible items in display order (pre-order, descending only
/// into expanded items).
pub fn visible_paths(items: &[Item]) -> Vec<ItemPath> {
    fn collect(items: &[Item], prefix: &mut ItemPath, out: &mut Vec<ItemPath>) {
        for (i, item) in items.iter().enumerate() {
            prefix.push(i);
            out.push(prefix.clone());
            if item.expanded && item.has_children() {
                collect(&item.children, prefix, out);
            }
            prefix.pop();
        }
    }

    let mut out = Vec::new();
    collect(items, &mut Vec::new(), &mut out);
    out
}

/// Find the current path of the item with the given key.
pub fn find_key(items: &[Item], key: ItemKey) -> Option<ItemPath> {
    for (i, item) in items.iter().enumerate() {
        if item.key == key {
            return Some(vec![i]);
        }
        if let Some(mut rest) = find_key(&item.children, key) {
            rest.insert(0, i);
            return Some(rest);
        }
    }
    None
}

/// Visit every item in the tree mutably.
pub fn walk_mut(items: &mut [Item], f: &mut impl FnMut(&mut Item)) {
    for item in items {
        f(item);
        walk_mut(&mut item.children, f);
    }
}

/// Visit every item in the tree.
pub fn walk(items: &[Item], f: &mut impl FnMut(&Item)) {
    for item in items {
        f(item);
        walk(&item.children, f);
    }
}

/// Number of focusable items anywhere in the tree.
pub fn focusable_count(items: &[Item]) -> usize {
    let mut count = 0;
    walk(items, &mut |item| {
        if item.focusable {
            count += 1;
        }
    });
    count
}

// -----------------------------------------------------------------------------
// Declarative source
// -----------------------------------------------------------------------------

/// The kind of element a widget is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    /// A single-line text input (slider).
    TextInput,
    /// A list, possibly nested (menu, tree menu, sortable list).
    List,
    /// A container of panels or slides (tabs, carousel).
    Container,
    /// Anything else (progress bar).
    Generic,
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ElementKind::TextInput => "text input",
            ElementKind::List => "list",
            ElementKind::Container => "container",
            ElementKind::Generic => "generic element",
        };
        f.write_str(name)
    }
}

/// One entry of the declarative source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SourceItem {
    pub label: String,
    /// Marks the initially selected entry (menus, trees).
    pub selected: bool,
    pub children: Vec<SourceItem>,
}

impl SourceItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn selected(mut self) -> Self {
        self.selected = true;
        self
    }

    pub fn child(mut self, child: SourceItem) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: Vec<SourceItem>) -> Self {
        self.children = children;
        self
    }
}

/// The declarative markup a widget is constructed from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Source {
    pub element: ElementKind,
    #[serde(default)]
    pub items: Vec<SourceItem>,
}

impl Source {
    pub fn new(element: ElementKind) -> Self {
        Self {
            element,
            items: Vec::new(),
        }
    }

    /// Shorthand for a flat list of labelled items.
    pub fn with_labels(element: ElementKind, labels: &[&str]) -> Self {
        Self {
            element,
            items: labels.iter().map(|l| SourceItem::new(*l)).collect(),
        }
    }

    pub fn item(mut self, item: SourceItem) -> Self {
        self.items.push(item);
        self
    }

    pub(crate) fn build_items(&self) -> Vec<Item> {
        let mut next_key = 0;
        self.items
            .iter()
            .map(|s| Item::from_source(s, &mut next_key))
            .collect()
    }
}
