//! Learn-page article catalog
//!
//! A hard-coded, immutable list of articles filtered in memory:
//! case-insensitive substring match against title, preview and tags,
//! optionally combined with a category filter. There is no CMS behind
//! this; the list is the content.

use serde::{Deserialize, Serialize};

/// Editorial category an article files under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArticleCategory {
    Procurement,
    Suppliers,
    Operations,
    Trends,
}

impl ArticleCategory {
    /// Display label used for filter pills and card badges
    pub fn label(&self) -> &'static str {
        match self {
            ArticleCategory::Procurement => "Procurement",
            ArticleCategory::Suppliers => "Suppliers",
            ArticleCategory::Operations => "Operations",
            ArticleCategory::Trends => "Trends",
        }
    }

    /// All categories, in filter-pill order
    pub fn all() -> &'static [ArticleCategory] {
        &[
            ArticleCategory::Procurement,
            ArticleCategory::Suppliers,
            ArticleCategory::Operations,
            ArticleCategory::Trends,
        ]
    }
}

impl std::fmt::Display for ArticleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A Learn-page article. Immutable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Article {
    /// Stable slug, unique within the catalog
    pub id: &'static str,
    pub title: &'static str,
    /// One-or-two sentence teaser shown on the card
    pub preview: &'static str,
    /// Markdown body shown in the reader
    pub body: &'static str,
    pub category: ArticleCategory,
    pub tags: &'static [&'static str],
    pub read_minutes: u8,
    pub author: &'static str,
    pub image_url: &'static str,
}

impl Article {
    /// Case-insensitive substring match against title, preview and tags.
    ///
    /// An empty or whitespace-only query matches everything.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(&needle)
            || self.preview.to_lowercase().contains(&needle)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&needle))
    }
}

/// Every article in the catalog, newest first
pub fn all() -> &'static [Article] {
    ARTICLES
}

/// Look up an article by slug
pub fn get(id: &str) -> Option<&'static Article> {
    ARTICLES.iter().find(|a| a.id == id)
}

/// Apply the Learn-page filters: substring query plus optional category.
/// Both must pass. Order of the catalog is preserved.
pub fn filtered(query: &str, category: Option<ArticleCategory>) -> Vec<&'static Article> {
    ARTICLES
        .iter()
        .filter(|a| category.map(|c| a.category == c).unwrap_or(true))
        .filter(|a| a.matches(query))
        .collect()
}

const ARTICLES: &[Article] = &[
    Article {
        id: "consolidated-ordering-playbook",
        title: "The Consolidated Ordering Playbook for Multi-Property Groups",
        preview: "How hotel groups cut invoice volume by two thirds by routing every property's orders through one approval chain.",
        body: "## Why invoice volume is the silent cost\n\nA twelve-property group placing orders property-by-property generates \
thousands of invoices a year, each one touched by reception, finance, and the GM. The paper is more expensive than the produce.\n\n\
### The playbook\n\n1. **Name one owner per category.** Produce, dry goods, linen, chemicals: one buyer each, group-wide.\n\
2. **Standardize the order list.** Agree the 80% of SKUs every property shares; leave 20% local.\n\
3. **Batch the approvals.** Weekly cut-offs beat daily firefighting.\n\n\
Groups running this playbook on Procura report **60–70% fewer invoices** within a quarter and meaningfully better unit prices, \
because suppliers quote against predictable volume.\n\n> Consolidation is not centralization. Chefs keep their menus; finance keeps its sanity.",
        category: ArticleCategory::Procurement,
        tags: &["ordering", "multi-property", "invoices", "approvals"],
        read_minutes: 7,
        author: "Mariana Duarte",
        image_url: "https://picsum.photos/seed/consolidated-ordering/640/360",
    },
    Article {
        id: "rfq-vs-standing-order",
        title: "RFQ or Standing Order? Choosing the Right Buying Motion",
        preview: "Not everything deserves a quotation round. A simple rule of thumb for when to tender and when to just reorder.",
        body: "## Two motions, one budget\n\nAn **RFQ** (request for quotation) invites competing suppliers to price a defined basket. \
A **standing order** repeats a known basket with a known supplier.\n\n### The rule of thumb\n\n- Spend is *volatile or seasonal*? RFQ it.\n\
- Spend is *stable and specified*? Standing order, re-tendered twice a year.\n- Spend is *new*? Always RFQ. The first price you hear is rarely the market.\n\n\
### What good RFQs share\n\n* A real specification (grade, size, delivery window), not a brand name.\n* Three to five invited suppliers; more adds noise, not signal.\n\
* A response deadline under a week. Urgency is a courtesy to everyone.\n\nProcura's RFQ flow enforces the specification fields so quotes arrive comparable.",
        category: ArticleCategory::Procurement,
        tags: &["rfq", "tendering", "pricing"],
        read_minutes: 5,
        author: "Jonas Keller",
        image_url: "https://picsum.photos/seed/rfq-standing/640/360",
    },
    Article {
        id: "fnb-cost-leaks",
        title: "Five F&B Cost Leaks Hiding in Plain Sight",
        preview: "Portion drift, phantom credits, and three other leaks that quietly add points to food cost, and how to plug them.",
        body: "## The usual suspects\n\n1. **Portion drift.** Recipes say 180g; the line serves 210g on busy nights. Two points of food cost, gone.\n\
2. **Phantom credits.** Short deliveries get promised credits that never land on a statement. Log every shortage at the dock.\n\
3. **Price creep between tenders.** The agreed price holds for a month, then drifts. Compare invoice price to quoted price automatically.\n\
4. **Spec substitution.** Ordered 5% fat mince, received 20%. Cheaper for the supplier, costlier on your plate yield.\n\
5. **Friday afternoon ordering.** Panic baskets pay list price.\n\n### Plugging them\n\nEach leak has the same fix: write the spec down, \
receive against it, and reconcile invoice to quote. Procura does the third part for you on every order.",
        category: ArticleCategory::Operations,
        tags: &["food cost", "f&b", "receiving", "invoices"],
        read_minutes: 6,
        author: "Priya Raman",
        image_url: "https://picsum.photos/seed/fnb-leaks/640/360",
    },
    Article {
        id: "supplier-scorecards",
        title: "Supplier Scorecards That Suppliers Actually Respect",
        preview: "Ditch the 40-row spreadsheet. Four metrics, reviewed quarterly, change supplier behavior more than any penalty clause.",
        body: "## Less is more\n\nScorecards fail when they measure everything. Suppliers ignore what they cannot parse. Four metrics are enough:\n\n\
| Metric | Target |\n|---|---|\n| On-time, in-full (OTIF) | > 96% |\n| Quote-to-invoice price match | 100% |\n| Credit resolution time | < 7 days |\n| Substitution rate | < 2% |\n\n\
### Run the review\n\nQuarterly, twenty minutes, data shared *before* the call. The conversation should hold no surprises; \
the numbers did the confronting already.\n\nBuyers on Procura get these four computed per supplier from order history; \
sellers see the same numbers, which is exactly the point.",
        category: ArticleCategory::Suppliers,
        tags: &["scorecards", "otif", "supplier management"],
        read_minutes: 5,
        author: "Mariana Duarte",
        image_url: "https://picsum.photos/seed/scorecards/640/360",
    },
    Article {
        id: "local-sourcing-reality",
        title: "Local Sourcing: Romance, Reality, and the 30% Rule",
        preview: "Guests love the chalkboard with the farm names. Your margin can love it too, if you cap the basket correctly.",
        body: "## The romance\n\nLocal sourcing sells rooms and covers. It also arrives in small vans, invoices erratically, and takes holidays in August.\n\n\
## The reality\n\nSmall producers cannot absorb your volume spikes, and you cannot absorb their admin. The failure mode is a chef \
with nine farm relationships and no time to cook.\n\n## The 30% rule\n\nCap local-producer spend at ~30% of the category and anchor the rest with \
a distributor who can cover gaps at agreed prices. Put the locals on simple standing orders; save the tenders for the anchor.\n\n\
Procura's vendor hub tags verified local producers by radius, so the chalkboard writes itself without the spreadsheet sprawl.",
        category: ArticleCategory::Trends,
        tags: &["local sourcing", "sustainability", "f&b"],
        read_minutes: 6,
        author: "Tomás Ferreira",
        image_url: "https://picsum.photos/seed/local-sourcing/640/360",
    },
    Article {
        id: "housekeeping-par-levels",
        title: "Par Levels for Housekeeping: The Math Nobody Wrote Down",
        preview: "Linen pars, amenity pars, and chemical pars: the formulas, and the occupancy signals that should move them.",
        body: "## Start with turns\n\nLinen par = rooms × pieces per room × (1 in use + 1 in laundry + 1 on shelf). Three-par is the floor, \
not the target; add half a par for every 10 points of occupancy above 75%.\n\n## Amenities\n\nAmenity usage tracks arrivals, not occupied nights. \
A 200-arrival week needs 200 sets plus 10% shrinkage, whatever the stay length.\n\n## Chemicals\n\nDose-controlled dispensers make chemical \
par a function of cleaned rooms. If usage rises faster than rooms cleaned, the dispensers are being bypassed. An audit, not an order, fixes that.\n\n\
### Reorder without thinking\n\nSet min/max on each par and let the order generate itself. The art is in the pars; the ordering should be boring.",
        category: ArticleCategory::Operations,
        tags: &["housekeeping", "par levels", "linen", "amenities"],
        read_minutes: 8,
        author: "Elif Demir",
        image_url: "https://picsum.photos/seed/par-levels/640/360",
    },
    Article {
        id: "payment-terms-leverage",
        title: "Payment Terms Are Procurement Leverage, Not a Finance Detail",
        preview: "Thirty days is not a law of nature. How terms, rebates, and early-payment discounts fit into a quote comparison.",
        body: "## The quote is not the price\n\nTwo quotes at the same unit price are not the same offer if one carries 14-day terms and the other 45.\n\
Working capital has a cost; so does a supplier who finances yours.\n\n### Compare like-for-like\n\nNormalize every quote to a common term \
(say net-30) using your cost of capital. A 2% early-payment discount on net-10 is worth taking at almost any realistic rate.\n\n### Rebates\n\n\
Volume rebates reward concentration, which is exactly what consolidated ordering produces. Negotiate the rebate *after* you can prove the volume.\n\n\
Procura displays terms alongside unit prices on every quote so the comparison is never apples to oranges.",
        category: ArticleCategory::Procurement,
        tags: &["payment terms", "negotiation", "working capital"],
        read_minutes: 5,
        author: "Jonas Keller",
        image_url: "https://picsum.photos/seed/payment-terms/640/360",
    },
    Article {
        id: "vendor-onboarding-checklist",
        title: "The 48-Hour Vendor Onboarding Checklist",
        preview: "Insurance, allergens, delivery windows, credit process: everything to collect before the first PO, in one pass.",
        body: "## Collect once, reuse forever\n\nThe slowest part of switching suppliers is the paperwork ping-pong. Collect it all in one pass:\n\n\
- [ ] Liability insurance certificate (with expiry reminder)\n- [ ] Food-safety / HACCP certification where relevant\n- [ ] Allergen and spec sheets per SKU\n\
- [ ] Delivery windows and minimum order values\n- [ ] Credit and returns process, named contact\n- [ ] Bank details via verified channel, never email\n\n\
## The 48-hour rule\n\nIf a vendor cannot assemble this inside two working days, that is data about how delivery problems will go.\n\n\
Sellers on Procura maintain this pack once on their profile; every new buyer sees it instantly, which is why onboarding there takes hours, not weeks.",
        category: ArticleCategory::Suppliers,
        tags: &["onboarding", "compliance", "vendor hub"],
        read_minutes: 4,
        author: "Elif Demir",
        image_url: "https://picsum.photos/seed/vendor-onboarding/640/360",
    },
    Article {
        id: "group-buying-myths",
        title: "Three Myths About Group Buying in Hospitality",
        preview: "No, you don't lose your chef's favorite suppliers. What group purchasing actually changes, and what it doesn't.",
        body: "## Myth one: you lose supplier choice\n\nGroup frameworks set prices for a catalogue; they rarely mandate exclusivity. \
The chef's mushroom forager survives every framework we have seen.\n\n## Myth two: it only helps big groups\n\nThe opposite. A 40-room independent \
joining a buying group inherits contract prices it could never tender alone. The big groups already have the leverage.\n\n\
## Myth three: the savings are theoretical\n\nFramework prices are real, but only if orders actually route through them. \
Compliance, meaning orders actually routed on-contract, is where savings leak. Measure maverick spend monthly.\n\n### The honest number\n\n\
Well-run hospitality buying groups deliver 6–12% on participating categories. Anyone quoting 30% is selling something other than groceries.",
        category: ArticleCategory::Trends,
        tags: &["group buying", "gpo", "independents"],
        read_minutes: 5,
        author: "Tomás Ferreira",
        image_url: "https://picsum.photos/seed/group-buying/640/360",
    },
    Article {
        id: "receiving-dock-discipline",
        title: "Receiving Dock Discipline: Where Contracts Become Real",
        preview: "Every negotiated term is worthless if the dock signs for whatever arrives. A 10-minute receiving routine that holds the line.",
        body: "## The last mile of procurement\n\nPrice, spec, and quantity were all agreed in writing. The only moment they become real \
is when someone checks the delivery against them.\n\n### The 10-minute routine\n\n1. Count cases against the delivery note *before* signing.\n\
2. Spot-weigh two random items against the spec.\n3. Temperature-check anything chilled (reject above 5°C, frozen above −15°C).\n\
4. Photograph shortages and quality rejects on the spot.\n5. Log the exception; the credit chase starts now, not at month-end.\n\n\
### Make rejection cheap\n\nCrews sign for bad deliveries when rejecting is complicated. One-tap exception logging at the dock is the whole game; \
the paperwork should cost less than the shortage.",
        category: ArticleCategory::Operations,
        tags: &["receiving", "quality", "credits"],
        read_minutes: 6,
        author: "Priya Raman",
        image_url: "https://picsum.photos/seed/receiving-dock/640/360",
    },
    Article {
        id: "seasonal-menu-procurement",
        title: "Engineering Seasonal Menus With Procurement in the Room",
        preview: "Menu changes decided without buyers create orphan stock and panic orders. A calendar that syncs chefs and procurement.",
        body: "## The orphan-stock problem\n\nEvery menu change strands inventory: the sauce base nobody uses now, the garnish for a dish that died.\n\
Multiply by four seasonal changes and you are writing off a pallet a year.\n\n## The calendar\n\n- **T−6 weeks:** chefs share draft menus; buyers flag \
long-lead and volatile items.\n- **T−4 weeks:** RFQs out for new items; run-down plan for outgoing stock.\n- **T−2 weeks:** prices locked, \
pars updated, first orders placed.\n- **T0:** launch with zero orphan SKUs.\n\n## Why it works\n\nProcurement in the menu meeting is not bureaucracy; \
it is the difference between a launch priced on quotes and one priced on whatever the van had that morning.",
        category: ArticleCategory::Operations,
        tags: &["menus", "seasonal", "planning", "f&b"],
        read_minutes: 7,
        author: "Mariana Duarte",
        image_url: "https://picsum.photos/seed/seasonal-menus/640/360",
    },
    Article {
        id: "digital-procurement-signals",
        title: "Four Signals Hospitality Procurement Is Finally Going Digital",
        preview: "WhatsApp ordering is dying slowly. The adoption signals we watch across two thousand venues, and what they predict.",
        body: "## The signals\n\n1. **Order channels are consolidating.** Venues that once ordered via five channels (phone, SMS, WhatsApp, email, rep visits) \
are collapsing onto one or two structured ones.\n2. **Sellers now ask for integrations first.** Three years ago suppliers resisted portals; \
today the first question is \"does it feed my ERP?\"\n3. **Finance drives adoption more than chefs.** The pull is invoice reconciliation, not ordering UX.\n\
4. **Independents are moving faster than groups.** No legacy system to sunset.\n\n## What it predicts\n\nThe venues digitizing order flow first are the ones \
winning credit disputes and holding suppliers to quoted prices, because they have the record. The moat is the data exhaust, not the ordering screen.",
        category: ArticleCategory::Trends,
        tags: &["digital", "adoption", "integrations"],
        read_minutes: 5,
        author: "Jonas Keller",
        image_url: "https://picsum.photos/seed/digital-signals/640/360",
    },
    Article {
        id: "chef-supplier-relationships",
        title: "Protecting Chef–Supplier Relationships Inside a Buying System",
        preview: "Systems fail when they fight the kitchen. How to digitize ordering without flattening the relationships that feed it.",
        body: "## The fear\n\nChefs hear \"procurement platform\" and picture a purchasing department vetoing their fish guy.\n\n## The design answer\n\n\
Good systems encode *who may buy what from whom* generously: the fish guy gets onboarded, tagged to the chef, and the orders flow through the same rails: \
quoted, received, reconciled. The relationship stays; the shadow ledger goes.\n\n### Three rules\n\n1. Never make a chef re-key an order a rep already took. \
Kill double entry, not conversations.\n2. Let kitchens flag \"protected\" suppliers exempt from re-tendering.\n3. Show chefs their own numbers first. \
Food cost by dish converts skeptics faster than any mandate.\n\nThe platforms that last are the ones the kitchen stops noticing.",
        category: ArticleCategory::Suppliers,
        tags: &["chefs", "relationships", "adoption"],
        read_minutes: 6,
        author: "Priya Raman",
        image_url: "https://picsum.photos/seed/chef-relationships/640/360",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_nonempty_with_unique_slugs() {
        assert!(!all().is_empty());
        for (i, a) in all().iter().enumerate() {
            for b in &all()[i + 1..] {
                assert_ne!(a.id, b.id, "duplicate slug {}", a.id);
            }
        }
    }

    #[test]
    fn test_get_by_slug() {
        let article = get("rfq-vs-standing-order").expect("known slug");
        assert_eq!(article.category, ArticleCategory::Procurement);
        assert!(get("no-such-article").is_none());
    }

    #[test]
    fn test_empty_query_matches_everything() {
        assert_eq!(filtered("", None).len(), all().len());
        assert_eq!(filtered("   ", None).len(), all().len());
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let lower = filtered("rfq", None);
        let upper = filtered("RFQ", None);
        assert_eq!(lower, upper);
        assert!(!lower.is_empty());
    }

    #[test]
    fn test_query_matches_tags() {
        let hits = filtered("otif", None);
        assert!(hits.iter().any(|a| a.id == "supplier-scorecards"));
    }

    #[test]
    fn test_category_filter_combines_with_query() {
        let all_ops = filtered("", Some(ArticleCategory::Operations));
        assert!(all_ops.iter().all(|a| a.category == ArticleCategory::Operations));

        let narrowed = filtered("receiving", Some(ArticleCategory::Operations));
        assert!(narrowed.len() <= all_ops.len());
        assert!(narrowed.iter().any(|a| a.id == "receiving-dock-discipline"));
    }

    #[test]
    fn test_no_match_returns_empty() {
        assert!(filtered("zzzz-no-such-topic", None).is_empty());
    }

    #[test]
    fn test_every_article_has_card_fields() {
        for a in all() {
            assert!(!a.title.is_empty());
            assert!(!a.preview.is_empty());
            assert!(!a.body.is_empty());
            assert!(!a.tags.is_empty());
            assert!(a.read_minutes > 0);
            assert!(!a.author.is_empty());
            assert!(a.image_url.starts_with("https://"));
        }
    }
}
