use serde::{Deserialize, Serialize};

use crate::domain::a001_decoration::DecorationId;
use crate::shared::notification::Notification;

/// Ссылка на декорацию в избранном
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WishlistItem {
    #[serde(rename = "decorId")]
    pub decoration_id: DecorationId,
}

/// Избранное пользователя: упорядоченный набор без дублей
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wishlist {
    items: Vec<WishlistItem>,
}

impl Wishlist {
    pub fn from_ids<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = DecorationId>,
    {
        let mut wishlist = Self::default();
        for id in ids {
            if !wishlist.contains(&id) {
                wishlist.items.push(WishlistItem { decoration_id: id });
            }
        }
        wishlist
    }

    pub fn contains(&self, id: &DecorationId) -> bool {
        self.items.iter().any(|item| &item.decoration_id == id)
    }

    /// Adds or removes `id`, returning the toast that describes the change
    pub fn toggle(&mut self, id: &DecorationId, title: &str) -> Notification {
        let was_wishlisted = self.contains(id);
        if was_wishlisted {
            self.items.retain(|item| &item.decoration_id != id);
        } else {
            self.items.push(WishlistItem {
                decoration_id: id.clone(),
            });
        }
        toggle_notification(was_wishlisted, title)
    }

    pub fn ids(&self) -> impl Iterator<Item = &DecorationId> {
        self.items.iter().map(|item| &item.decoration_id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// "3 items in your wishlist"
    pub fn summary_label(&self) -> String {
        let count = self.len();
        let suffix = if count == 1 { "" } else { "s" };
        format!("{count} item{suffix} in your wishlist")
    }
}

/// Flips a single card's wishlist flag, returning the new flag and its toast
pub fn toggle_wishlisted(is_wishlisted: bool, title: &str) -> (bool, Notification) {
    (!is_wishlisted, toggle_notification(is_wishlisted, title))
}

fn toggle_notification(was_wishlisted: bool, title: &str) -> Notification {
    if was_wishlisted {
        Notification::info(
            "Removed from wishlist",
            format!("{title} removed from your wishlist"),
        )
    } else {
        Notification::info("Added to wishlist", format!("{title} added to your wishlist"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flag_pairs_with_notification() {
        let (on, added) = toggle_wishlisted(false, "Garden Party Setup");
        assert!(on);
        assert_eq!(added.title, "Added to wishlist");
        assert_eq!(added.description, "Garden Party Setup added to your wishlist");

        let (off, removed) = toggle_wishlisted(on, "Garden Party Setup");
        assert!(!off);
        assert_eq!(removed.title, "Removed from wishlist");
        assert_eq!(removed.description, "Garden Party Setup removed from your wishlist");
    }

    #[test]
    fn test_wishlist_toggle_adds_then_removes() {
        let id = DecorationId::new("4");
        let mut wishlist = Wishlist::default();

        let n = wishlist.toggle(&id, "Garden Party Setup");
        assert!(wishlist.contains(&id));
        assert_eq!(n.title, "Added to wishlist");

        let n = wishlist.toggle(&id, "Garden Party Setup");
        assert!(wishlist.is_empty());
        assert_eq!(n.title, "Removed from wishlist");
    }

    #[test]
    fn test_from_ids_drops_duplicates() {
        let wishlist = Wishlist::from_ids(
            ["1", "4", "1", "6"].into_iter().map(DecorationId::new),
        );
        let ids: Vec<_> = wishlist.ids().map(DecorationId::as_str).collect();
        assert_eq!(ids, vec!["1", "4", "6"]);
    }

    #[test]
    fn test_summary_label_pluralises() {
        assert_eq!(Wishlist::default().summary_label(), "0 items in your wishlist");
        let one = Wishlist::from_ids([DecorationId::new("1")]);
        assert_eq!(one.summary_label(), "1 item in your wishlist");
    }
}
