use chrono::{DateTime, Duration, Utc};

use crate::category::Category;
use crate::item::{PriceTier, SearchItem};

struct Seed {
	id: &'static str,
	title: &'static str,
	description: &'static str,
	category: Category,
	url: &'static str,
	age_days: i64,
	tier: PriceTier,
	popularity: u32,
}

const SEEDS: &[Seed] = &[
	Seed {
		id: "svc-telemedicine",
		title: "Telemedicine Consultation",
		description: "Video visits with licensed clinicians from home",
		category: Category::Service,
		url: "/services/telemedicine",
		age_days: 0,
		tier: PriceTier::Paid,
		popularity: 98,
	},
	Seed {
		id: "svc-dermatology",
		title: "Dermatology Consultation",
		description: "Skin checks and treatment plans with board-certified dermatologists",
		category: Category::Service,
		url: "/services/dermatology",
		age_days: 12,
		tier: PriceTier::Premium,
		popularity: 89,
	},
	Seed {
		id: "svc-physio",
		title: "Physiotherapy at Home",
		description: "Mobility and rehabilitation sessions in your living room",
		category: Category::Service,
		url: "/services/physiotherapy",
		age_days: 45,
		tier: PriceTier::Paid,
		popularity: 71,
	},
	Seed {
		id: "art-sleep",
		title: "Sleep Hygiene Basics",
		description: "Simple routines that improve rest for caregivers",
		category: Category::Article,
		url: "/articles/sleep-hygiene",
		age_days: 3,
		tier: PriceTier::Free,
		popularity: 64,
	},
	Seed {
		id: "art-telehealth",
		title: "Getting Ready for Your First Telehealth Visit",
		description: "Checklist for a smooth video consultation",
		category: Category::Article,
		url: "/articles/first-telehealth-visit",
		age_days: 20,
		tier: PriceTier::Free,
		popularity: 77,
	},
	Seed {
		id: "art-mental-health",
		title: "Mental Health Support for Family Caregivers",
		description: "Recognising burnout and where to find help",
		category: Category::Article,
		url: "/articles/caregiver-mental-health",
		age_days: 200,
		tier: PriceTier::Free,
		popularity: 83,
	},
	Seed {
		id: "hlp-night-nurse",
		title: "Night Nurse Companion",
		description: "Overnight care and medication reminders",
		category: Category::Helper,
		url: "/helpers/night-nurse",
		age_days: 6,
		tier: PriceTier::Premium,
		popularity: 58,
	},
	Seed {
		id: "hlp-elder-care",
		title: "Elder Care Assistant",
		description: "Daily living support, errands and companionship",
		category: Category::Helper,
		url: "/helpers/elder-care",
		age_days: 90,
		tier: PriceTier::Paid,
		popularity: 74,
	},
	Seed {
		id: "mkt-clinic-starter",
		title: "Clinic Starter Kit",
		description: "Templates and intake forms for a new practice",
		category: Category::MarketplaceListing,
		url: "/marketplace/clinic-starter-kit",
		age_days: 15,
		tier: PriceTier::Premium,
		popularity: 51,
	},
	Seed {
		id: "mkt-nutrition-plan",
		title: "Nutrition Plan Workbook",
		description: "Meal planning worksheets reviewed by dietitians",
		category: Category::MarketplaceListing,
		url: "/marketplace/nutrition-workbook",
		age_days: 400,
		tier: PriceTier::Paid,
		popularity: 40,
	},
];

/// Demo catalog used when no corpus file is supplied.
///
/// Creation dates are relative to `now` so date facets stay meaningful.
#[must_use]
pub fn sample_items(now: DateTime<Utc>) -> Vec<SearchItem> {
	SEEDS
		.iter()
		.map(|seed| {
			SearchItem::new(
				seed.id,
				seed.title,
				seed.category,
				now - Duration::days(seed.age_days),
			)
			.with_description(seed.description)
			.with_url(seed.url)
			.with_price_tier(seed.tier)
			.with_popularity(seed.popularity)
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::corpus::Corpus;

	#[test]
	fn sample_ids_are_unique_and_cover_every_category() {
		let corpus = Corpus::new(sample_items(Utc::now())).unwrap();
		for category in Category::ALL {
			assert!(
				corpus
					.iter()
					.any(|item| item.category.known() == Some(category)),
				"missing {category}"
			);
		}
	}
}
