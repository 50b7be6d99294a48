pub mod categoria;
pub mod pergunta;
pub mod resposta;
pub mod resultado;
pub mod usuario;

pub use categoria::{Categoria, CategoriaInput};
pub use pergunta::{Pergunta, PerguntaInput};
pub use resposta::{Resposta, RespostaInput, RespostaItem, RespostasMultiplasInput};
pub use resultado::{Estatisticas, ResultadoInput, ResultadoQuiz, TopScoresQuery};
pub use usuario::{Usuario, UsuarioInput};
