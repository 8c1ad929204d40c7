//! CLI frontend for the Ashen Ledger campaign tracker.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "ash",
    about = "Ashen Ledger: character, gear, and soul bookkeeping for Souls-like tabletop campaigns",
    version,
    propagate_version = true
)]
struct Cli {
    /// Session file to operate on
    #[arg(short, long, global = true, default_value = "session.json")]
    session: PathBuf,

    /// Log engine state transitions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new, empty session file
    Init {
        /// Campaign title
        #[arg(short, long)]
        campaign: Option<String>,

        /// Maximum rings worn at once
        #[arg(long)]
        ring_limit: Option<usize>,

        /// Soul cost of the first level-up
        #[arg(long)]
        base_soul_cost: Option<u64>,

        /// Overwrite an existing session file
        #[arg(short, long)]
        force: bool,
    },

    /// Summarize characters, mobs, and world items
    Status,

    /// Create or inspect characters
    Character {
        #[command(subcommand)]
        action: CharacterAction,
    },

    /// Create mobs and manage their health and abilities
    Mob {
        #[command(subcommand)]
        action: MobAction,
    },

    /// Create an item in the world pool
    Item {
        #[command(subcommand)]
        kind: ItemAction,
    },

    /// List world items, or a character's inventory
    Items {
        /// Show this character's inventory instead of the world pool
        #[arg(short, long)]
        character: Option<String>,
    },

    /// Move a world item (by name or index) into a character's inventory
    Pickup {
        /// Character name
        character: String,
        /// World item name or index
        item: String,
    },

    /// Move an unequipped item from a character back to the world
    Drop {
        /// Character name
        character: String,
        /// Item name
        item: String,
    },

    /// Equip an item from a character's inventory
    Equip {
        /// Character name
        character: String,
        /// Item name
        item: String,
    },

    /// Unequip an item
    Unequip {
        /// Character name
        character: String,
        /// Item name
        item: String,
    },

    /// Use one unit of a consumable
    Use {
        /// Character name
        character: String,
        /// Consumable name
        item: String,
    },

    /// Add units to a consumable stack
    Restock {
        /// Character name
        character: String,
        /// Consumable name
        item: String,
        /// Units to add
        quantity: u32,
    },

    /// Destroy an unequipped item in a character's inventory
    Delete {
        /// Character name
        character: String,
        /// Item name
        item: String,
    },

    /// Drink one charge of an Estus flask
    Drink {
        /// Character name
        character: String,
        /// Flask name
        flask: String,
    },

    /// Add a charge to an Estus flask
    UpgradeFlask {
        /// Character name
        character: String,
        /// Flask name
        flask: String,
    },

    /// Award, spend, or cash in souls
    Souls {
        #[command(subcommand)]
        action: SoulsAction,
    },

    /// Spend souls to raise a stat by one
    Level {
        /// Character name
        character: String,
        /// Stat to raise (vigor, attunement, strength, dexterity, intelligence, faith)
        stat: String,
    },

    /// Deal damage to a character or mob
    Damage {
        /// Character or mob name
        target: String,
        /// Damage amount
        amount: u32,
        /// Target is a mob
        #[arg(short, long)]
        mob: bool,
    },

    /// Rest at a bonfire (everyone, or one character)
    Rest {
        /// Only this character
        character: Option<String>,
    },

    /// Spend mana directly
    Mana {
        /// Character name
        character: String,
        /// Mana to spend
        amount: f64,
    },

    /// Cast an equipped spell
    Cast {
        /// Character name
        character: String,
        /// Spell name
        spell: String,
    },
}

#[derive(Subcommand)]
enum CharacterAction {
    /// Create a character with full HP and mana
    New {
        /// Character name
        name: String,
        /// Vigor
        #[arg(long, default_value = "10")]
        vigor: u32,
        /// Attunement
        #[arg(long, default_value = "10")]
        attunement: u32,
        /// Strength
        #[arg(long, default_value = "10")]
        strength: u32,
        /// Dexterity
        #[arg(long, default_value = "10")]
        dexterity: u32,
        /// Intelligence
        #[arg(long, default_value = "10")]
        intelligence: u32,
        /// Faith
        #[arg(long, default_value = "10")]
        faith: u32,
        /// Starting level
        #[arg(long, default_value = "1")]
        level: u32,
    },

    /// Show a character sheet
    Show {
        /// Character name
        name: String,
    },
}

#[derive(Subcommand)]
enum MobAction {
    /// Create a mob at full health
    New {
        /// Mob name
        name: String,
        /// Hit points
        #[arg(long)]
        hp: u32,
        /// Armor class
        #[arg(long, default_value = "10")]
        ac: u32,
    },

    /// Restore hit points to a mob
    Heal {
        /// Mob name
        name: String,
        /// HP to restore
        amount: u32,
    },

    /// Give a mob a weapon or spell from the world pool
    Ability {
        /// Mob name
        mob: String,
        /// World item name or index
        item: String,
    },

    /// Return a mob's ability to the world pool
    Forget {
        /// Mob name
        mob: String,
        /// Ability name
        ability: String,
    },
}

#[derive(clap::Args)]
struct RequirementArgs {
    /// Required strength
    #[arg(long = "str", default_value = "0")]
    strength: u32,
    /// Required dexterity
    #[arg(long = "dex", default_value = "0")]
    dexterity: u32,
    /// Required intelligence
    #[arg(long = "int", default_value = "0")]
    intelligence: u32,
    /// Required faith
    #[arg(long = "fth", default_value = "0")]
    faith: u32,
}

#[derive(Subcommand)]
enum ItemAction {
    /// A weapon
    Weapon {
        /// Item name
        name: String,
        /// Damage dice, e.g. 2d6
        #[arg(long, default_value = "1d6")]
        dice: String,
        #[command(flatten)]
        requirements: RequirementArgs,
        /// Description
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// A spell
    Spell {
        /// Item name
        name: String,
        /// Damage dice, e.g. 2d6
        #[arg(long, default_value = "1d6")]
        dice: String,
        #[command(flatten)]
        requirements: RequirementArgs,
        /// Mana per cast
        #[arg(long, default_value = "10")]
        mana_cost: u32,
        /// Spell slots used while equipped
        #[arg(long, default_value = "1")]
        slots: u32,
        /// Description
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// A ring
    Ring {
        /// Item name
        name: String,
        /// Vigor bonus
        #[arg(long, default_value = "0")]
        vigor: u32,
        /// Attunement bonus
        #[arg(long, default_value = "0")]
        attunement: u32,
        /// Strength bonus
        #[arg(long, default_value = "0")]
        strength: u32,
        /// Dexterity bonus
        #[arg(long, default_value = "0")]
        dexterity: u32,
        /// Intelligence bonus
        #[arg(long, default_value = "0")]
        intelligence: u32,
        /// Faith bonus
        #[arg(long, default_value = "0")]
        faith: u32,
        /// Description
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// A piece of armor
    Armor {
        /// Item name
        name: String,
        /// Slot: helmet, arms, chest, legs, boots (or 0-4)
        #[arg(long)]
        slot: String,
        /// Armor class bonus
        #[arg(long, default_value = "1")]
        ac: u32,
        #[command(flatten)]
        requirements: RequirementArgs,
        /// Description
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// An Estus flask
    Flask {
        /// Item name
        name: String,
        /// HP restored per draught
        #[arg(long, default_value = "0")]
        hp: u32,
        /// Mana restored per draught
        #[arg(long, default_value = "0")]
        mana: u32,
        /// Starting charges
        #[arg(long, default_value = "3")]
        charges: u32,
        /// Charges after a rest
        #[arg(long, default_value = "3")]
        max_charges: u32,
        /// Upgrade level; each point adds 10% to restore amounts
        #[arg(long, default_value = "0")]
        modifier: u32,
        /// Flask type: health or mana
        #[arg(long = "type", default_value = "health")]
        flask_type: String,
        /// Description
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// A soul item
    Soul {
        /// Item name
        name: String,
        /// Souls granted when consumed
        value: u64,
        /// Description
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// A stack of consumables
    Consumable {
        /// Item name
        name: String,
        /// Units in the stack
        #[arg(default_value = "1")]
        amount: u32,
        /// Description
        #[arg(short, long, default_value = "")]
        description: String,
    },
}

#[derive(Subcommand)]
enum SoulsAction {
    /// Award souls
    Add {
        /// Character name
        character: String,
        /// Souls to add
        amount: u64,
    },

    /// Spend or lose souls (floors at zero)
    Remove {
        /// Character name
        character: String,
        /// Souls to remove
        amount: u64,
    },

    /// Cash in a soul item
    Consume {
        /// Character name
        character: String,
        /// Soul item name
        item: String,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("ASH_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let path = cli.session.as_path();

    let result = match cli.command {
        Commands::Init {
            campaign,
            ring_limit,
            base_soul_cost,
            force,
        } => commands::init::run(path, campaign, ring_limit, base_soul_cost, force),
        Commands::Status => commands::status::run(path),
        Commands::Character { action } => match action {
            CharacterAction::New {
                name,
                vigor,
                attunement,
                strength,
                dexterity,
                intelligence,
                faith,
                level,
            } => commands::character::new(
                path,
                &name,
                ash_core::Attributes::new(vigor, attunement, strength, dexterity, intelligence, faith),
                level,
            ),
            CharacterAction::Show { name } => commands::character::show(path, &name),
        },
        Commands::Mob { action } => match action {
            MobAction::New { name, hp, ac } => commands::mob::new(path, &name, hp, ac),
            MobAction::Heal { name, amount } => commands::mob::heal(path, &name, amount),
            MobAction::Ability { mob, item } => commands::mob::assign(path, &mob, &item),
            MobAction::Forget { mob, ability } => commands::mob::forget(path, &mob, &ability),
        },
        Commands::Item { kind } => commands::item::run(path, kind),
        Commands::Items { character } => commands::inventory::list(path, character.as_deref()),
        Commands::Pickup { character, item } => commands::inventory::pickup(path, &character, &item),
        Commands::Drop { character, item } => commands::inventory::drop(path, &character, &item),
        Commands::Equip { character, item } => commands::equip::equip(path, &character, &item),
        Commands::Unequip { character, item } => {
            commands::equip::unequip(path, &character, &item)
        }
        Commands::Use { character, item } => commands::inventory::consume(path, &character, &item),
        Commands::Restock {
            character,
            item,
            quantity,
        } => commands::inventory::restock(path, &character, &item, quantity),
        Commands::Delete { character, item } => {
            commands::inventory::delete(path, &character, &item)
        }
        Commands::Drink { character, flask } => commands::combat::drink(path, &character, &flask),
        Commands::UpgradeFlask { character, flask } => {
            commands::combat::upgrade_flask(path, &character, &flask)
        }
        Commands::Souls { action } => match action {
            SoulsAction::Add { character, amount } => {
                commands::progress::add_souls(path, &character, amount)
            }
            SoulsAction::Remove { character, amount } => {
                commands::progress::remove_souls(path, &character, amount)
            }
            SoulsAction::Consume { character, item } => {
                commands::progress::consume_soul(path, &character, &item)
            }
        },
        Commands::Level { character, stat } => commands::progress::level(path, &character, &stat),
        Commands::Damage {
            target,
            amount,
            mob,
        } => commands::combat::damage(path, &target, amount, mob),
        Commands::Rest { character } => commands::combat::rest(path, character.as_deref()),
        Commands::Mana { character, amount } => commands::combat::mana(path, &character, amount),
        Commands::Cast { character, spell } => commands::combat::cast(path, &character, &spell),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
