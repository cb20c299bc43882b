use super::Turn;
use crate::{
    deck, entrance_capacity, students_per_turn, towers_len, Action, Bag, CloudTile, Color,
    Island, Player, Players, Professor, SchoolBoard, Student, Table, TowerColor, TowerOwners,
    Wizard, COINS_LEN, INITIAL_COINS, ISLANDS_LEN,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

impl Table {
    /// Generates a [Table] which is set up but holds no students anywhere.
    ///
    /// # Returns
    ///
    /// A [Table] struct with the properties set to the following:
    /// * `players`: `players_len` players named after their index with empty entrances, full
    /// towers and [INITIAL_COINS] in an expert match.
    /// * `islands`: [ISLANDS_LEN] empty islands.
    /// * `cloud_tiles`: One empty cloud tile per player.
    /// * `bag`: An empty bag.
    /// * `professors`: Every professor unclaimed.
    /// * `mother_nature`: `0`.
    /// * `selected_player`: [None].
    pub fn empty_table(players_len: usize, expert: bool) -> Table {
        let tower_colors = TowerColor::tower_colors();
        let wizards = Wizard::wizards();
        let mut tower_owners = TowerOwners::new();
        let players: Players = (0..players_len)
            .map(|index| {
                let mut board = SchoolBoard::new(
                    entrance_capacity(players_len),
                    tower_colors[index],
                    towers_len(players_len),
                );
                if expert {
                    board.add_coins(INITIAL_COINS);
                }
                tower_owners.insert(index, tower_colors[index]);
                Player::new(index.to_string(), wizards[index], board, deck(wizards[index]))
            })
            .collect();
        Table {
            players_len,
            expert,
            nicknames: players.iter().map(|player| player.nickname().to_owned()).collect(),
            players,
            tower_owners,
            islands: (0..ISLANDS_LEN).map(|_| Island::new()).collect(),
            cloud_tiles: (0..players_len)
                .map(|_| CloudTile::new(students_per_turn(players_len)))
                .collect(),
            bag: Bag::new(),
            professors: Color::colors().into_iter().map(Professor::new).collect(),
            bank: if expert {
                COINS_LEN - players_len * INITIAL_COINS
            } else {
                0
            },
            mother_nature: 0,
            selected_player: None,
            played_turn_orders: Vec::new(),
            turn: Turn::default(),
            set_up: true,
            last_round: false,
            last_round_played: false,
            rng: StdRng::seed_from_u64(0),
        }
    }

    /// A mutable reference to a player.
    pub fn mut_player(&mut self, index: usize) -> &mut Player {
        &mut self.players[index]
    }

    /// A mutable reference to `self.islands`.
    pub fn mut_islands(&mut self) -> &mut Vec<Island> {
        &mut self.islands
    }

    /// A mutable reference to `self.cloud_tiles`.
    pub fn mut_cloud_tiles(&mut self) -> &mut Vec<CloudTile> {
        &mut self.cloud_tiles
    }

    /// A mutable reference to `self.mother_nature`.
    pub fn mut_mother_nature(&mut self) -> &mut usize {
        &mut self.mother_nature
    }

    /// A mutable reference to `self.last_round`.
    pub fn mut_last_round(&mut self) -> &mut bool {
        &mut self.last_round
    }

    /// Adds `per_color` students of every color to the bag.
    pub fn fill_bag(&mut self, per_color: usize) {
        self.bag.fill(&mut self.rng, per_color);
    }

    /// Adds a student of every color in `colors` to the entrance of `player`.
    pub fn put_in_entrance(&mut self, player: usize, colors: &[Color]) {
        let students = colors.iter().copied().map(Student::new).collect();
        self.players[player]
            .board_mut()
            .fill_entrance(students)
            .unwrap();
    }

    /// Seats `len` students of `color` in the dining room of `player` without paying coins.
    pub fn put_in_dining(&mut self, player: usize, color: Color, len: usize) {
        for _ in 0..len {
            self.players[player]
                .board_mut()
                .add_to_dining(Student::new(color))
                .unwrap();
        }
    }

    /// Hands the unclaimed professor of `color` to `player`.
    pub fn give_professor(&mut self, player: usize, color: Color) {
        let professor = self.take_unclaimed_professor(color).unwrap();
        self.players[player].board_mut().add_professor(professor);
    }

    /// Puts `len` students of `color` onto `island`.
    pub fn put_on_island(&mut self, island: usize, color: Color, len: usize) {
        for _ in 0..len {
            self.islands[island].add_student(Student::new(color));
        }
    }

    /// Moves towers of `player` onto every tile of `island` without a tower.
    pub fn conquer_island(&mut self, island: usize, player: usize) {
        let tiles_len = self.islands[island].tiles_len();
        let towers = self.players[player].board_mut().take_towers(tiles_len);
        let rest = self.islands[island].place_towers(towers);
        assert!(rest.is_empty());
    }

    /// Adds a student of every color in `colors` to the cloud tile at `index`.
    pub fn fill_cloud_tile(&mut self, index: usize, colors: &[Color]) {
        self.cloud_tiles[index].fill(colors.iter().copied().map(Student::new));
    }

    /// Marks that `player` played the assistant card with `turn_order` this turn.
    pub fn play_card_for(&mut self, player: usize, turn_order: usize) {
        self.players[player].select_assistant_card(turn_order);
        self.players[player].play_assistant_card().unwrap();
        self.played_turn_orders.push((player, turn_order));
        self.turn.last_action = Some(Action::PlayAssistantCard);
        self.selected_player = Some(player);
    }
}
