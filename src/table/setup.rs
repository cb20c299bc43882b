use crate::{
    deck, entrance_capacity, students_per_turn, towers_len, Bag, CloudTile, Color,
    Container, GameError, Island, NewError, Player, Players, Professor, SchoolBoard, Table,
    TowerColor, TowerOwners, Transition, Wizard, BAG_STUDENTS_PER_COLOR, COINS_LEN, INITIAL_COINS,
    ISLANDS_LEN, MAX_PLAYERS, MIN_PLAYERS, STARTER_STUDENTS_PER_COLOR,
};
use super::Turn;
use map_macro::hash_set;
use rand::rngs::StdRng;
use rand::Rng;
use std::collections::HashSet;
use tap::Tap;

impl Table {
    /// Checks that `players_len` is between [MIN_PLAYERS] and [MAX_PLAYERS] and creates a table
    /// waiting for players to [join](Table::add_player).
    ///
    /// # Arguments
    ///
    /// * `players_len`: The number of players in the match.
    /// * `expert`: Whether coins and character cards are in play.
    /// * `rng`: The source of every random decision of the match.
    ///
    /// # Errors
    ///
    /// * [NewError::TooFewPlayers] Attempting to start with fewer than [MIN_PLAYERS] players.
    /// * [NewError::TooManyPlayers] Attempting to start with more than [MAX_PLAYERS] players.
    ///
    /// # See Also
    ///
    /// * [Game::new](crate::Game::new)
    pub fn new(
        players_len: usize,
        expert: bool,
        rng: StdRng,
    ) -> Result<Table, HashSet<NewError>> {
        Table::check(players_len)?;
        Ok(Table {
            players_len,
            expert,
            nicknames: Vec::with_capacity(players_len),
            players: Players::new(),
            tower_owners: TowerOwners::new(),
            islands: Vec::with_capacity(ISLANDS_LEN),
            cloud_tiles: Vec::with_capacity(players_len),
            bag: Bag::new(),
            professors: Default::default(),
            bank: if expert { COINS_LEN } else { 0 },
            mother_nature: 0,
            selected_player: None,
            played_turn_orders: Vec::with_capacity(players_len),
            turn: Turn::default(),
            set_up: false,
            last_round: false,
            last_round_played: false,
            rng,
        })
    }

    fn check(players_len: usize) -> Result<(), HashSet<NewError>> {
        if players_len < MIN_PLAYERS {
            return Err(hash_set! { NewError::TooFewPlayers { players_len } });
        }
        if players_len > MAX_PLAYERS {
            return Err(hash_set! { NewError::TooManyPlayers { players_len } });
        }
        Ok(())
    }

    /// Seats a player with `nickname`.
    ///
    /// # Errors
    ///
    /// * [Transition::AlreadySetUp] Attempting to join after setup.
    /// * [Container::Players] Attempting to join a full table.
    ///
    /// # Returns
    ///
    /// The index of the new player.
    pub fn add_player(&mut self, nickname: impl Into<String>) -> Result<usize, GameError> {
        if self.set_up {
            return Err(GameError::IllegalTransition(Transition::AlreadySetUp));
        }
        if self.nicknames.len() >= self.players_len {
            return Err(GameError::CapacityExceeded {
                container: Container::Players,
                count: self.nicknames.len(),
            });
        }
        let nickname = nickname.into();
        log::debug!("{} joined as player {}", nickname, self.nicknames.len());
        self.nicknames.push(nickname);
        Ok(self.nicknames.len() - 1)
    }

    /// The nicknames of the players who joined, in joining order.
    #[inline]
    pub fn nicknames(&self) -> &[String] {
        &self.nicknames
    }

    /// Prepares the table once every player joined. The steps happen in this order:
    ///
    /// 1. Lays out [ISLANDS_LEN] islands in a ring.
    /// 2. Puts mother nature on a random island.
    /// 3. Shuffles [STARTER_STUDENTS_PER_COLOR] students of every color and puts one onto
    /// every island except the island with mother nature and the island opposite.
    /// 4. Fills the bag with [BAG_STUDENTS_PER_COLOR] students of every color.
    /// 5. Creates one cloud tile per player.
    /// 6. Puts one professor of every color aside.
    /// 7. Gives every player a school board sized by the number of players and a distinct
    /// tower color, plus [INITIAL_COINS] from the bank in an expert match.
    /// 8. Deals every player the deck of a distinct wizard.
    /// 9. Fills every entrance from the bag.
    ///
    /// # Errors
    ///
    /// * [Transition::AlreadySetUp] Attempting to set up twice.
    /// * [Transition::PlayersMissing] Attempting to set up before every player joined.
    /// * [GameError::InsufficientResource] When the bag cannot fill the entrances.
    pub fn setup(&mut self) -> Result<(), GameError> {
        if self.set_up {
            return Err(GameError::IllegalTransition(Transition::AlreadySetUp));
        }
        if self.nicknames.len() < self.players_len {
            return Err(GameError::IllegalTransition(Transition::PlayersMissing {
                joined: self.nicknames.len(),
                expected: self.players_len,
            }));
        }

        self.islands = (0..ISLANDS_LEN).map(|_| Island::new()).collect();
        self.mother_nature = self.rng.gen_range(0..ISLANDS_LEN);
        self.seed_islands();

        self.bag.fill(&mut self.rng, BAG_STUDENTS_PER_COLOR);
        self.cloud_tiles = (0..self.players_len)
            .map(|_| CloudTile::new(students_per_turn(self.players_len)))
            .collect();
        self.professors = Color::colors().into_iter().map(Professor::new).collect();

        let tower_colors = TowerColor::tower_colors();
        let wizards = Wizard::wizards();
        let entrance_capacity = entrance_capacity(self.players_len);
        let towers_len = towers_len(self.players_len);
        for (index, nickname) in self.nicknames.iter().enumerate() {
            let tower_color = tower_colors[index];
            let mut board = SchoolBoard::new(entrance_capacity, tower_color, towers_len);
            if self.expert {
                board.add_coins(INITIAL_COINS);
                self.bank -= INITIAL_COINS;
            }
            self.tower_owners.insert(index, tower_color);
            let wizard = wizards[index];
            self.players
                .push(Player::new(nickname.clone(), wizard, board, deck(wizard)));
        }

        for player in self.players.iter_mut() {
            let students = self.bag.draw_exactly(entrance_capacity)?;
            player.board_mut().fill_entrance(students)?;
        }

        self.set_up = true;
        log::info!(
            "set up {} players, mother nature on island {}, {} students in the bag",
            self.players_len,
            self.mother_nature,
            self.bag.len()
        );
        Ok(())
    }

    /// Puts one student of a shuffled starter set onto every island except the island with
    /// mother nature and the island opposite.
    fn seed_islands(&mut self) {
        let mut starter =
            Bag::new().tap_mut(|bag| bag.fill(&mut self.rng, STARTER_STUDENTS_PER_COLOR));
        let opposite = (self.mother_nature + ISLANDS_LEN / 2) % ISLANDS_LEN;
        for (index, island) in self.islands.iter_mut().enumerate() {
            if index == self.mother_nature || index == opposite {
                continue;
            }
            if let Some(student) = starter.draw() {
                island.add_student(student);
            }
        }
    }
}
