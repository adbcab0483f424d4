//! Reference catalogue - the hard-coded races and classes seeded at setup
//!
//! Nine races with one subrace each, twelve classes with one subclass each.
//! Every top-level entity is created in a single request carrying its nested
//! children, so each creation is atomic on the engine side. Ability bonus
//! vectors are authored here exactly as they must land in the store.

use lorekeepr_domain::{
    AbilityBonuses, Class, Description, DomainError, EntityName, Feature, HitDie, Race, Subclass,
    Subrace,
};
use lorekeepr_protocol::{CreateClassData, CreateRaceData};

use lorekeepr_client::ApiPort;

fn name(s: &str) -> Result<EntityName, DomainError> {
    EntityName::new(s)
}

fn desc(s: &str) -> Result<Description, DomainError> {
    Description::new(s)
}

fn trait_of(feature_name: &str, feature_desc: &str) -> Result<Feature, DomainError> {
    Ok(Feature::trait_of(name(feature_name)?, desc(feature_desc)?))
}

fn at_level(feature_name: &str, feature_desc: &str, level: u8) -> Result<Feature, DomainError> {
    Ok(Feature::at_level(name(feature_name)?, desc(feature_desc)?, level))
}

const fn bonuses(
    strength: i8,
    dexterity: i8,
    constitution: i8,
    intelligence: i8,
    wisdom: i8,
    charisma: i8,
) -> AbilityBonuses {
    AbilityBonuses {
        strength,
        dexterity,
        constitution,
        intelligence,
        wisdom,
        charisma,
    }
}

// =============================================================================
// Races
// =============================================================================

/// The nine seeded races, each with exactly one subrace.
pub fn races() -> Result<Vec<Race>, DomainError> {
    Ok(vec![
        Race {
            name: name("Dwarf")?,
            description: desc("Bold and hardy folk of mountain holds and deep mines.")?,
            bonuses: bonuses(0, 0, 2, 0, 0, 0),
            features: vec![
                trait_of("Darkvision", "See in dim light within 60 feet as if it were bright light.")?,
                trait_of("Dwarven Resilience", "Advantage on saving throws against poison, and resistance against poison damage.")?,
            ],
            subraces: vec![Subrace {
                name: name("Hill Dwarf")?,
                description: desc("Keen senses, deep intuition, and remarkable resilience.")?,
                bonuses: bonuses(0, 0, 0, 0, 1, 0),
                features: vec![trait_of("Dwarven Toughness", "Hit point maximum increases by 1 per level.")?],
            }],
        },
        Race {
            name: name("Elf")?,
            description: desc("Graceful people of otherworldly beauty and long memory.")?,
            bonuses: bonuses(0, 2, 0, 0, 0, 0),
            features: vec![
                trait_of("Darkvision", "See in dim light within 60 feet as if it were bright light.")?,
                trait_of("Keen Senses", "Proficiency in the Perception skill.")?,
                trait_of("Fey Ancestry", "Advantage on saving throws against being charmed; magic cannot put you to sleep.")?,
            ],
            subraces: vec![Subrace {
                name: name("High Elf")?,
                description: desc("Keen mind and a mastery of at least the basics of magic.")?,
                bonuses: bonuses(0, 0, 0, 1, 0, 0),
                features: vec![trait_of("Cantrip", "Know one cantrip of your choice from the wizard spell list.")?],
            }],
        },
        Race {
            name: name("Halfling")?,
            description: desc("Small, practical folk who value home, hearth, and comfort.")?,
            bonuses: bonuses(0, 2, 0, 0, 0, 0),
            features: vec![
                trait_of("Lucky", "Reroll a 1 on an attack roll, ability check, or saving throw.")?,
                trait_of("Brave", "Advantage on saving throws against being frightened.")?,
            ],
            subraces: vec![Subrace {
                name: name("Lightfoot Halfling")?,
                description: desc("Able to easily hide from notice, even using other people as cover.")?,
                bonuses: bonuses(0, 0, 0, 0, 0, 1),
                features: vec![trait_of("Naturally Stealthy", "Attempt to hide even when obscured only by a creature one size larger.")?],
            }],
        },
        Race {
            name: name("Human")?,
            description: desc("The youngest and most adaptable of the common races.")?,
            bonuses: bonuses(1, 1, 1, 1, 1, 1),
            features: vec![trait_of("Versatile", "One additional language of your choice.")?],
            subraces: vec![Subrace {
                name: name("Variant Human")?,
                description: desc("Trades the broad talent of humanity for a single exceptional knack.")?,
                bonuses: bonuses(1, 1, 0, 0, 0, 0),
                features: vec![trait_of("Feat", "Gain one feat of your choice at first level.")?],
            }],
        },
        Race {
            name: name("Dragonborn")?,
            description: desc("Proud draconic kin whose blood carries the gift of the dragons.")?,
            bonuses: bonuses(2, 0, 0, 0, 0, 1),
            features: vec![trait_of("Breath Weapon", "Exhale destructive energy in a 15-foot cone or 30-foot line.")?],
            subraces: vec![Subrace {
                name: name("Blue Dragonborn")?,
                description: desc("Descended from the lightning wyrms of the desert wastes.")?,
                bonuses: AbilityBonuses::zero(),
                features: vec![trait_of("Lightning Resistance", "Resistance to lightning damage.")?],
            }],
        },
        Race {
            name: name("Gnome")?,
            description: desc("Small inventors and illusionists with boundless enthusiasm.")?,
            bonuses: bonuses(0, 0, 0, 2, 0, 0),
            features: vec![
                trait_of("Darkvision", "See in dim light within 60 feet as if it were bright light.")?,
                trait_of("Gnome Cunning", "Advantage on Intelligence, Wisdom, and Charisma saving throws against magic.")?,
            ],
            subraces: vec![Subrace {
                name: name("Rock Gnome")?,
                description: desc("Hardy tinkerers with a gift for clockwork contraptions.")?,
                bonuses: bonuses(0, 0, 1, 0, 0, 0),
                features: vec![trait_of("Tinker", "Construct tiny clockwork devices from scrap.")?],
            }],
        },
        Race {
            name: name("Half-Elf")?,
            description: desc("Walking in two worlds, belonging wholly to neither.")?,
            bonuses: bonuses(0, 0, 0, 0, 0, 2),
            features: vec![
                trait_of("Fey Ancestry", "Advantage on saving throws against being charmed; magic cannot put you to sleep.")?,
                trait_of("Skill Versatility", "Proficiency in two skills of your choice.")?,
            ],
            subraces: vec![Subrace {
                name: name("Wood Half-Elf")?,
                description: desc("Raised among the forest clans of their elven parent.")?,
                bonuses: bonuses(0, 1, 0, 0, 0, 0),
                features: vec![trait_of("Fleet of Foot", "Base walking speed increases to 35 feet.")?],
            }],
        },
        Race {
            name: name("Half-Orc")?,
            description: desc("Scarred survivors who channel their fury into strength.")?,
            bonuses: bonuses(2, 0, 1, 0, 0, 0),
            features: vec![
                trait_of("Darkvision", "See in dim light within 60 feet as if it were bright light.")?,
                trait_of("Relentless Endurance", "Drop to 1 hit point instead of 0 once per long rest.")?,
                trait_of("Savage Attacks", "Roll one extra weapon damage die on a critical hit.")?,
            ],
            subraces: vec![Subrace {
                name: name("Feral Half-Orc")?,
                description: desc("Closer to the old tribes than to the settled lands.")?,
                bonuses: AbilityBonuses::zero(),
                features: vec![trait_of("Menacing Presence", "Proficiency in the Intimidation skill.")?],
            }],
        },
        Race {
            name: name("Tiefling")?,
            description: desc("Bearers of an infernal bloodline, met with stares and whispers.")?,
            bonuses: bonuses(0, 0, 0, 1, 0, 2),
            features: vec![
                trait_of("Darkvision", "See in dim light within 60 feet as if it were bright light.")?,
                trait_of("Hellish Resistance", "Resistance to fire damage.")?,
            ],
            subraces: vec![Subrace {
                name: name("Feral Tiefling")?,
                description: desc("An infernal heritage expressed in speed rather than presence.")?,
                bonuses: bonuses(0, 1, 0, 0, 0, 0),
                features: vec![trait_of("Infernal Legacy", "Know the thaumaturgy cantrip.")?],
            }],
        },
    ])
}

// =============================================================================
// Classes
// =============================================================================

/// The twelve seeded classes, each with exactly one subclass.
pub fn classes() -> Result<Vec<Class>, DomainError> {
    Ok(vec![
        Class {
            name: name("Barbarian")?,
            description: desc("A fierce warrior who channels primal fury in battle.")?,
            hit_die: HitDie::D12,
            features: vec![
                at_level("Rage", "Enter a battle fury granting damage bonuses and resistance.", 1)?,
                at_level("Unarmored Defense", "AC equals 10 + Dexterity modifier + Constitution modifier while unarmored.", 1)?,
            ],
            subclasses: vec![Subclass {
                name: name("Path of the Berserker")?,
                description: desc("For some barbarians, rage is a means to an end - that end being violence.")?,
                features: vec![at_level("Frenzy", "Make a bonus-action melee attack each turn while raging, at the cost of exhaustion.", 3)?],
            }],
        },
        Class {
            name: name("Bard")?,
            description: desc("An inspiring magician whose music weaves the fabric of reality.")?,
            hit_die: HitDie::D8,
            features: vec![
                at_level("Spellcasting", "Cast bard spells using Charisma.", 1)?,
                at_level("Bardic Inspiration", "Grant an ally a d6 to add to one roll.", 1)?,
            ],
            subclasses: vec![Subclass {
                name: name("College of Lore")?,
                description: desc("Collectors of knowledge from scholarly tomes to peasant tales.")?,
                features: vec![at_level("Cutting Words", "Expend an inspiration die to subtract from an enemy's roll.", 3)?],
            }],
        },
        Class {
            name: name("Cleric")?,
            description: desc("A priestly champion wielding divine magic in service of a higher power.")?,
            hit_die: HitDie::D8,
            features: vec![at_level("Spellcasting", "Cast cleric spells using Wisdom.", 1)?],
            subclasses: vec![Subclass {
                name: name("Life Domain")?,
                description: desc("The vibrant positive energy that sustains all life.")?,
                features: vec![at_level("Channel Divinity: Preserve Life", "Restore hit points equal to five times your cleric level, divided among the wounded.", 2)?],
            }],
        },
        Class {
            name: name("Druid")?,
            description: desc("A priest of the Old Faith, wielding the powers of nature.")?,
            hit_die: HitDie::D8,
            features: vec![
                at_level("Druidic", "Know the secret language of druids.", 1)?,
                at_level("Spellcasting", "Cast druid spells using Wisdom.", 1)?,
            ],
            subclasses: vec![Subclass {
                name: name("Circle of the Land")?,
                description: desc("Mystics and sages safeguarding the old ways.")?,
                features: vec![at_level("Natural Recovery", "Recover expended spell slots during a short rest.", 2)?],
            }],
        },
        Class {
            name: name("Fighter")?,
            description: desc("A master of martial combat, skilled with a variety of weapons and armor.")?,
            hit_die: HitDie::D10,
            features: vec![
                at_level("Fighting Style", "Adopt a particular style of fighting as your specialty.", 1)?,
                at_level("Second Wind", "Regain 1d10 + fighter level hit points as a bonus action.", 1)?,
            ],
            subclasses: vec![Subclass {
                name: name("Champion")?,
                description: desc("Raw physical power honed to deadly perfection.")?,
                features: vec![at_level("Improved Critical", "Weapon attacks score a critical hit on a roll of 19 or 20.", 3)?],
            }],
        },
        Class {
            name: name("Monk")?,
            description: desc("A master of martial arts, harnessing the power of body and soul.")?,
            hit_die: HitDie::D8,
            features: vec![
                at_level("Unarmored Defense", "AC equals 10 + Dexterity modifier + Wisdom modifier while unarmored.", 1)?,
                at_level("Martial Arts", "Use Dexterity for unarmed strikes and monk weapons.", 1)?,
            ],
            subclasses: vec![Subclass {
                name: name("Way of the Open Hand")?,
                description: desc("Masters of unarmed combat who manipulate an opponent's ki.")?,
                features: vec![at_level("Open Hand Technique", "Flurry of Blows can knock prone, push, or deny reactions.", 3)?],
            }],
        },
        Class {
            name: name("Paladin")?,
            description: desc("A holy warrior bound to a sacred oath.")?,
            hit_die: HitDie::D10,
            features: vec![
                at_level("Divine Sense", "Detect celestials, fiends, and undead within 60 feet.", 1)?,
                at_level("Lay on Hands", "A pool of healing power that restores 5 hit points per paladin level.", 1)?,
            ],
            subclasses: vec![Subclass {
                name: name("Oath of Devotion")?,
                description: desc("The loftiest ideals of justice, virtue, and order.")?,
                features: vec![at_level("Sacred Weapon", "Channel Divinity to add Charisma to weapon attack rolls.", 3)?],
            }],
        },
        Class {
            name: name("Ranger")?,
            description: desc("A warrior of the wilderness, hunter of the civilization's foes.")?,
            hit_die: HitDie::D10,
            features: vec![
                at_level("Favored Enemy", "Advantage on tracking and recalling lore about a chosen foe.", 1)?,
                at_level("Natural Explorer", "Master of one type of terrain.", 1)?,
            ],
            subclasses: vec![Subclass {
                name: name("Hunter")?,
                description: desc("The bulwark between civilization and the terrors of the wild.")?,
                features: vec![at_level("Hunter's Prey", "Colossus Slayer, Giant Killer, or Horde Breaker.", 3)?],
            }],
        },
        Class {
            name: name("Rogue")?,
            description: desc("A scoundrel who uses stealth and trickery to overcome obstacles.")?,
            hit_die: HitDie::D8,
            features: vec![
                at_level("Sneak Attack", "Deal extra damage to a distracted target once per turn.", 1)?,
                at_level("Thieves' Cant", "Know the secret dialect of the criminal underworld.", 1)?,
            ],
            subclasses: vec![Subclass {
                name: name("Thief")?,
                description: desc("Burglars, bandits, cutpurses, and treasure hunters.")?,
                features: vec![at_level("Fast Hands", "Use Cunning Action for sleight of hand, tools, or the Use an Object action.", 3)?],
            }],
        },
        Class {
            name: name("Sorcerer")?,
            description: desc("A spellcaster who draws on inherent magic from a gift or bloodline.")?,
            hit_die: HitDie::D6,
            features: vec![at_level("Spellcasting", "Cast sorcerer spells using Charisma.", 1)?],
            subclasses: vec![Subclass {
                name: name("Draconic Bloodline")?,
                description: desc("Magic that traces back to a draconic ancestor.")?,
                features: vec![
                    at_level("Draconic Resilience", "Hit point maximum increases by 1 per level; unarmored AC is 13 + Dexterity modifier.", 2)?,
                    at_level("Elemental Affinity", "Add Charisma to one damage roll of spells matching your draconic ancestry.", 6)?,
                ],
            }],
        },
        Class {
            name: name("Warlock")?,
            description: desc("A wielder of magic derived from a bargain with an extraplanar entity.")?,
            hit_die: HitDie::D8,
            features: vec![at_level("Pact Magic", "Cast warlock spells from short-rest slots using Charisma.", 1)?],
            subclasses: vec![Subclass {
                name: name("The Fiend")?,
                description: desc("A pact with a power of the lower planes.")?,
                features: vec![
                    at_level("Dark One's Blessing", "Gain temporary hit points when you reduce a hostile creature to 0.", 2)?,
                    at_level("Dark One's Own Luck", "Add a d10 to one ability check or saving throw.", 6)?,
                ],
            }],
        },
        Class {
            name: name("Wizard")?,
            description: desc("A scholarly magic-user capable of manipulating the structures of reality.")?,
            hit_die: HitDie::D6,
            features: vec![
                at_level("Spellcasting", "Cast wizard spells prepared from your spellbook using Intelligence.", 1)?,
                at_level("Arcane Recovery", "Recover expended spell slots during a short rest once per day.", 1)?,
            ],
            subclasses: vec![Subclass {
                name: name("School of Evocation")?,
                description: desc("Sculptors of elemental energy into destructive effect.")?,
                features: vec![at_level("Sculpt Spells", "Shield chosen allies from your own evocation spells.", 2)?],
            }],
        },
    ])
}

// =============================================================================
// Seeding
// =============================================================================

/// Seed the whole catalogue. Creation is sequential; the first error aborts
/// everything that follows.
pub async fn seed_all<A: ApiPort>(api: &A) -> anyhow::Result<usize> {
    let mut total = 0;
    total += seed_races(api).await?;
    total += seed_classes(api).await?;
    Ok(total)
}

async fn seed_races<A: ApiPort>(api: &A) -> anyhow::Result<usize> {
    let races = races()?;
    let count = races.len();
    for race in &races {
        let payload = CreateRaceData::from(race);
        let _: serde_json::Value = api.post("/api/races", &payload).await?;
        tracing::debug!("Created race {}", race.name);
    }
    tracing::info!("Seeded {count} races");
    Ok(count)
}

async fn seed_classes<A: ApiPort>(api: &A) -> anyhow::Result<usize> {
    let classes = classes()?;
    let count = classes.len();
    for class in &classes {
        let payload = CreateClassData::from(class);
        let _: serde_json::Value = api.post("/api/classes", &payload).await?;
        tracing::debug!("Created class {}", class.name);
    }
    tracing::info!("Seeded {count} classes");
    Ok(count)
}
