use utoipa::OpenApi;

use crate::models::{
    Categoria, CategoriaInput, Estatisticas, Pergunta, PerguntaInput, Resposta, RespostaInput,
    RespostaItem, RespostasMultiplasInput, ResultadoInput, ResultadoQuiz, Usuario, UsuarioInput,
};

/// Machine-readable API description assembled from the handler annotations,
/// served interactively at `/api-docs`.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "API Quiz RH",
        version = "1.0.0",
        description = "API RESTful para sistema de quiz de Recursos Humanos",
        license(name = "ISC")
    ),
    paths(
        crate::handlers::health_check,
        crate::handlers::categorias::listar,
        crate::handlers::categorias::buscar,
        crate::handlers::categorias::criar,
        crate::handlers::categorias::atualizar,
        crate::handlers::categorias::deletar,
        crate::handlers::perguntas::listar,
        crate::handlers::perguntas::buscar,
        crate::handlers::perguntas::buscar_por_categoria,
        crate::handlers::perguntas::buscar_por_dificuldade,
        crate::handlers::perguntas::criar,
        crate::handlers::perguntas::atualizar,
        crate::handlers::perguntas::deletar,
        crate::handlers::respostas::listar,
        crate::handlers::respostas::buscar,
        crate::handlers::respostas::buscar_por_pergunta,
        crate::handlers::respostas::buscar_correta,
        crate::handlers::respostas::criar,
        crate::handlers::respostas::criar_multiplas,
        crate::handlers::respostas::atualizar,
        crate::handlers::respostas::deletar,
        crate::handlers::respostas::deletar_por_pergunta,
        crate::handlers::usuarios::listar,
        crate::handlers::usuarios::buscar,
        crate::handlers::usuarios::buscar_por_email,
        crate::handlers::usuarios::buscar_resultados,
        crate::handlers::usuarios::criar,
        crate::handlers::usuarios::atualizar,
        crate::handlers::usuarios::deletar,
        crate::handlers::resultados::listar,
        crate::handlers::resultados::buscar,
        crate::handlers::resultados::buscar_por_usuario,
        crate::handlers::resultados::top_scores,
        crate::handlers::resultados::estatisticas,
        crate::handlers::resultados::criar,
        crate::handlers::resultados::atualizar,
        crate::handlers::resultados::deletar,
        crate::handlers::resultados::deletar_por_usuario,
    ),
    components(schemas(
        Categoria,
        CategoriaInput,
        Pergunta,
        PerguntaInput,
        Resposta,
        RespostaInput,
        RespostaItem,
        RespostasMultiplasInput,
        Usuario,
        UsuarioInput,
        ResultadoQuiz,
        ResultadoInput,
        Estatisticas,
    )),
    tags(
        (name = "Sistema", description = "Health check e utilitários"),
        (name = "Categorias", description = "Categorias de perguntas"),
        (name = "Perguntas", description = "Perguntas do quiz"),
        (name = "Respostas", description = "Respostas das perguntas"),
        (name = "Usuários", description = "Usuários do sistema"),
        (name = "Resultados", description = "Resultados e estatísticas de quiz"),
    )
)]
pub struct ApiDoc;
